use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use gtk4 as gtk;
use gtk4::glib;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::DonutChart;
use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::CairoRenderer;

pub type SharedDonutChart = Rc<RefCell<DonutChart<CairoRenderer>>>;

/// Hosts a `DonutChart` inside a `gtk::DrawingArea`.
///
/// Resize events feed the layout, the widget frame clock feeds
/// `DonutChart::advance`, and the draw function paints through Cairo.
pub struct GtkDonutChartAdapter {
    chart: SharedDonutChart,
    drawing_area: gtk::DrawingArea,
}

impl GtkDonutChartAdapter {
    #[must_use]
    pub fn new(chart: DonutChart<CairoRenderer>) -> Self {
        let viewport = chart.viewport();
        let chart = Rc::new(RefCell::new(chart));

        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        drawing_area.set_draw_func({
            let chart = Rc::clone(&chart);
            move |_area, context, width, height| {
                let mut chart = chart.borrow_mut();
                if let Some(viewport) = viewport_from_allocation(width, height) {
                    if let Err(err) = chart.resize(viewport) {
                        warn!(error = %err, "skipping donut chart draw after invalid resize");
                        return;
                    }
                }
                if let Err(err) = chart.render_on_cairo_context(context) {
                    warn!(error = %err, "failed to render donut chart");
                }
            }
        });

        drawing_area.connect_resize({
            let chart = Rc::clone(&chart);
            move |area, width, height| {
                let Some(viewport) = viewport_from_allocation(width, height) else {
                    return;
                };
                if let Err(err) = chart.borrow_mut().resize(viewport) {
                    warn!(error = %err, "ignoring donut chart resize");
                    return;
                }
                area.queue_draw();
            }
        });

        let last_frame_time_us = Cell::new(None::<i64>);
        drawing_area.add_tick_callback({
            let chart = Rc::clone(&chart);
            move |area, clock| {
                let now_us = clock.frame_time();
                let delta = last_frame_time_us
                    .replace(Some(now_us))
                    .and_then(|previous_us| u64::try_from(now_us - previous_us).ok())
                    .map_or(Duration::ZERO, Duration::from_micros);

                let needs_redraw = {
                    let mut chart = chart.borrow_mut();
                    chart.advance(delta);
                    chart.take_redraw_request()
                };
                if needs_redraw {
                    area.queue_draw();
                }
                glib::ControlFlow::Continue
            }
        });

        Self {
            chart,
            drawing_area,
        }
    }

    #[must_use]
    pub fn chart(&self) -> SharedDonutChart {
        Rc::clone(&self.chart)
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    /// Replaces chart data and schedules a repaint.
    pub fn set_data(&self, values: Vec<f64>) -> ChartResult<()> {
        self.chart.borrow_mut().set_data(values)?;
        self.drawing_area.queue_draw();
        Ok(())
    }
}

fn viewport_from_allocation(width: i32, height: i32) -> Option<Viewport> {
    let viewport = Viewport::new(u32::try_from(width).ok()?, u32::try_from(height).ok()?);
    viewport.is_valid().then_some(viewport)
}
