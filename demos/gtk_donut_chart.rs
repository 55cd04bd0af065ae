use donut_chart::FillMode;
use donut_chart::api::{DonutChart, DonutChartConfig};
use donut_chart::core::Viewport;
use donut_chart::error::ChartResult;
use donut_chart::platform_gtk::GtkDonutChartAdapter;
use donut_chart::render::CairoRenderer;
use gtk4 as gtk;
use gtk4::prelude::*;

const QUARTERS: [f64; 4] = [0.25, 0.25, 0.25, 0.25];
const SEGMENT_COLORS: [u32; 4] = [0xFF_F4_43_36, 0xFF_4C_AF_50, 0xFF_21_96_F3, 0xFF_FF_C1_07];

fn main() {
    let _ = donut_chart::telemetry::init_default_tracing();
    let app = gtk::Application::builder()
        .application_id("rs.donut_chart.demos.gtk_donut_chart")
        .build();
    app.connect_activate(build_ui);
    app.run();
}

fn build_chart(fill_mode: FillMode) -> ChartResult<DonutChart<CairoRenderer>> {
    let mut renderer = CairoRenderer::new(1, 1)?;
    renderer.set_clear_color(None)?;
    let config = DonutChartConfig::for_density(1.0)?
        .with_fill_mode(fill_mode)
        .with_argb_colors(SEGMENT_COLORS);
    let mut chart = DonutChart::new(renderer, config, Viewport::new(360, 360))?;
    chart.set_data(QUARTERS.to_vec())?;
    Ok(chart)
}

fn build_ui(app: &gtk::Application) {
    let root = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    root.set_margin_top(12);
    root.set_margin_bottom(12);
    root.set_margin_start(12);
    root.set_margin_end(12);

    for fill_mode in [FillMode::Parallel, FillMode::Sequential] {
        let chart = match build_chart(fill_mode) {
            Ok(chart) => chart,
            Err(err) => {
                eprintln!("failed to initialize {fill_mode:?} donut chart: {err}");
                return;
            }
        };
        let adapter = GtkDonutChartAdapter::new(chart);

        let column = gtk::Box::new(gtk::Orientation::Vertical, 6);
        column.append(adapter.drawing_area());

        let replay_button = gtk::Button::with_label(&format!("Replay {fill_mode:?}"));
        let chart = adapter.chart();
        let drawing_area = adapter.drawing_area().clone();
        replay_button.connect_clicked(move |_| {
            chart.borrow_mut().restart_animation();
            drawing_area.queue_draw();
        });
        column.append(&replay_button);

        let uneven_button = gtk::Button::with_label("Uneven data");
        uneven_button.connect_clicked(move |_| {
            if let Err(err) = adapter.set_data(vec![0.1, 0.2, 0.15, 0.3, 0.05]) {
                eprintln!("failed to set data: {err}");
            }
        });
        column.append(&uneven_button);

        root.append(&column);
    }

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title("donut-chart demo")
        .default_width(780)
        .default_height(460)
        .child(&root)
        .build();
    window.present();
}
