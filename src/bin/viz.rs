use eframe::egui;
use egui_plot::{HLine, Legend, Line, Plot, PlotPoints};

use projectile_sim::types::Launch;
use projectile_sim::{simulate, Method, Trajectory};

const V0: f64 = 25.0;
const ANGLE: f64 = 45.0;

fn main() -> eframe::Result {
    // Study A: drag sweep with forward Euler.
    let sweep: Vec<(String, Trajectory)> = [0.0, 0.1, 0.3, 0.8]
        .into_iter()
        .map(|k| {
            let traj = simulate(&Launch {
                v0: V0,
                angle_deg: ANGLE,
                k,
                dt: 0.05,
                method: Method::Euler,
                ..Launch::default()
            });
            let label = if k == 0.0 {
                "k=0 (vacuum)".to_string()
            } else {
                format!("k={k} (euler)")
            };
            (label, traj)
        })
        .collect();

    // Study B: integration error at k = 0.5.
    let k = 0.5;
    let compare = vec![
        (
            "euler dt=0.1".to_string(),
            run(k, 0.1, Method::Euler),
        ),
        ("rk2 dt=0.1".to_string(), run(k, 0.1, Method::Rk2)),
        (
            "reference rk2 dt=0.001".to_string(),
            run(k, 0.001, Method::Rk2),
        ),
    ];

    let app = TrajectoryViz { sweep, compare };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native("Projectile Flight Simulator", options, Box::new(|_| Ok(Box::new(app))))
}

fn run(k: f64, dt: f64, method: Method) -> Trajectory {
    simulate(&Launch {
        v0: V0,
        angle_deg: ANGLE,
        k,
        dt,
        method,
        ..Launch::default()
    })
}

struct TrajectoryViz {
    sweep: Vec<(String, Trajectory)>,
    compare: Vec<(String, Trajectory)>,
}

fn overlay_plot(ui: &mut egui::Ui, id: &str, series: &[(String, Trajectory)], size: egui::Vec2) {
    Plot::new(id)
        .width(size.x)
        .height(size.y)
        .x_axis_label("Distance x (m)")
        .y_axis_label("Height y (m)")
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            plot_ui.hline(HLine::new("ground", 0.0));
            for (label, traj) in series {
                let points: PlotPoints = traj.points().collect();
                plot_ui.line(Line::new(label, points));
            }
        });
}

impl eframe::App for TrajectoryViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading(format!(
                "Projectile trajectories (v0={V0} m/s, angle={ANGLE}°)"
            ));
            ui.label("Left: drag sweep (euler).  Right: Euler vs RK2 at k=0.5.");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half = egui::Vec2::new(available.x / 2.0 - 8.0, available.y - 8.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label("Drag sweep");
                    overlay_plot(ui, "sweep", &self.sweep, half);
                });
                ui.vertical(|ui| {
                    ui.label("Method comparison");
                    overlay_plot(ui, "compare", &self.compare, half);
                });
            });
        });
    }
}
