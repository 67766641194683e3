use clap::{Parser, Subcommand, ValueEnum};
use std::error::Error;

use projectile_engine::{
    aim, flight_metrics, integrate, integrate_drag_comparison, landing_lat_lon,
    sample_trajectory, AimSolution, BounceParams, DragParams, RotationParams,
    SimulationParameters, Target, TrajectoryResult,
};

#[derive(Parser)]
#[command(name = "projectile")]
#[command(version = "0.1.0")]
#[command(about = "Projectile trajectory simulator and inverse solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Closed-form flight with no air resistance
    Flight {
        /// Launch speed (m/s)
        #[arg(short = 'v', long, default_value = "10.0")]
        speed: f64,

        /// Launch angle (degrees from horizontal)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Launch height (m)
        #[arg(long, default_value = "0.0")]
        height: f64,

        /// Gravitational acceleration (m/s²)
        #[arg(short = 'g', long, default_value = "9.81")]
        gravity: f64,

        /// Number of sample intervals
        #[arg(long, default_value = "100")]
        samples: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Show every trajectory point
        #[arg(long)]
        full: bool,
    },

    /// Stepped flight with quadratic drag through an exponential atmosphere
    Drag {
        /// Launch speed (m/s)
        #[arg(short = 'v', long, default_value = "50.0")]
        speed: f64,

        /// Launch angle (degrees from horizontal)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Launch height (m)
        #[arg(long, default_value = "0.0")]
        height: f64,

        /// Gravitational acceleration (m/s²)
        #[arg(short = 'g', long, default_value = "9.81")]
        gravity: f64,

        /// Drag coefficient Cd
        #[arg(long, default_value = "0.1")]
        drag_coefficient: f64,

        /// Cross-sectional area (m²)
        #[arg(long, default_value = "0.007854")]
        area: f64,

        /// Projectile mass (kg)
        #[arg(short = 'm', long, default_value = "0.1")]
        mass: f64,

        /// Sea-level air density (kg/m³)
        #[arg(long, default_value = "1.225")]
        density: f64,

        /// Atmospheric scale height (m)
        #[arg(long, default_value = "8500.0")]
        scale_height: f64,

        /// Also run the constant-density companion and compare ranges
        #[arg(long)]
        compare: bool,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Show every trajectory point
        #[arg(long)]
        full: bool,
    },

    /// Stepped flight with restitutive ground bounces
    Bounce {
        /// Launch speed (m/s)
        #[arg(short = 'v', long, default_value = "10.0")]
        speed: f64,

        /// Launch angle (degrees from horizontal)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Launch height (m)
        #[arg(long, default_value = "10.0")]
        height: f64,

        /// Gravitational acceleration (m/s²)
        #[arg(short = 'g', long, default_value = "9.81")]
        gravity: f64,

        /// Coefficient of restitution (0 to 1)
        #[arg(short = 'e', long, default_value = "0.7")]
        restitution: f64,

        /// Number of bounces before the run stops
        #[arg(long, default_value = "6")]
        max_bounces: u32,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Show every trajectory point
        #[arg(long)]
        full: bool,
    },

    /// Stepped flight over a rotating spherical planet
    Orbital {
        /// Launch speed (m/s)
        #[arg(short = 'v', long, default_value = "3000.0")]
        speed: f64,

        /// Launch angle (degrees from horizontal)
        #[arg(short = 'a', long, default_value = "45.0")]
        angle: f64,

        /// Launch height (m)
        #[arg(long, default_value = "0.0")]
        height: f64,

        /// Surface gravitational acceleration (m/s²)
        #[arg(short = 'g', long, default_value = "9.81")]
        gravity: f64,

        /// Planet radius (m)
        #[arg(long, default_value = "6371000.0")]
        planet_radius: f64,

        /// Rotation period (s); negative reverses the spin
        #[arg(long, default_value = "86400.0")]
        rotation_period: f64,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Show every trajectory point
        #[arg(long)]
        full: bool,
    },

    /// Solve for the launch angles that hit a target
    Aim {
        /// Launch speed (m/s)
        #[arg(short = 'v', long, default_value = "15.0")]
        speed: f64,

        /// Target horizontal offset from the launch point (m)
        #[arg(short = 'x', long)]
        target_x: f64,

        /// Target vertical offset from the launch point (m)
        #[arg(short = 'y', long, default_value = "0.0")]
        target_y: f64,

        /// Gravitational acceleration (m/s²)
        #[arg(short = 'g', long, default_value = "9.81")]
        gravity: f64,

        /// Number of sample intervals per shot path
        #[arg(long, default_value = "100")]
        samples: usize,

        /// Output format
        #[arg(short = 'o', long, default_value = "table")]
        output: OutputFormat,

        /// Show every point of every shot path
        #[arg(long)]
        full: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
    Table,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Flight {
            speed,
            angle,
            height,
            gravity,
            samples,
            output,
            full,
        } => {
            let params = SimulationParameters {
                launch_height: height,
                launch_angle_deg: angle,
                launch_speed: speed,
                gravity,
                ..Default::default()
            };
            let metrics = flight_metrics(&params)?;
            let result = sample_trajectory(&params, samples)?;
            if matches!(output, OutputFormat::Table) {
                println!("╔════════════════════════════════════════╗");
                println!("║         CLOSED-FORM FLIGHT             ║");
                println!("╠════════════════════════════════════════╣");
                println!("║ Apogee:            {:>8.2} m          ║", metrics.apogee_height);
                println!("║ Apogee at x:       {:>8.2} m          ║", metrics.apogee_x);
                println!("╚════════════════════════════════════════╝");
            }
            display_result(&result, output, full)?;
        }

        Commands::Drag {
            speed,
            angle,
            height,
            gravity,
            drag_coefficient,
            area,
            mass,
            density,
            scale_height,
            compare,
            output,
            full,
        } => {
            let params = SimulationParameters {
                launch_height: height,
                launch_angle_deg: angle,
                launch_speed: speed,
                gravity,
                drag: Some(DragParams {
                    drag_coefficient,
                    cross_section_area: area,
                    mass,
                    sea_level_density: density,
                    scale_height,
                }),
                ..Default::default()
            };
            if compare {
                let comparison = integrate_drag_comparison(&params)?;
                if matches!(output, OutputFormat::Table) {
                    println!("╔════════════════════════════════════════╗");
                    println!("║       DENSITY MODEL COMPARISON         ║");
                    println!("╠════════════════════════════════════════╣");
                    println!(
                        "║ Diminishing ρ:     {:>8.2} m          ║",
                        comparison.variable_density.summary.range
                    );
                    println!(
                        "║ Constant ρ0:       {:>8.2} m          ║",
                        comparison.constant_density.summary.range
                    );
                    println!("╚════════════════════════════════════════╝");
                }
                display_result(&comparison.variable_density, output, full)?;
            } else {
                let result = integrate(&params)?;
                display_result(&result, output, full)?;
            }
        }

        Commands::Bounce {
            speed,
            angle,
            height,
            gravity,
            restitution,
            max_bounces,
            output,
            full,
        } => {
            let params = SimulationParameters {
                launch_height: height,
                launch_angle_deg: angle,
                launch_speed: speed,
                gravity,
                bounce: Some(BounceParams {
                    restitution,
                    max_bounces,
                }),
                ..Default::default()
            };
            let result = integrate(&params)?;
            display_result(&result, output, full)?;
        }

        Commands::Orbital {
            speed,
            angle,
            height,
            gravity,
            planet_radius,
            rotation_period,
            output,
            full,
        } => {
            let rotation = RotationParams {
                planet_radius,
                rotation_period,
            };
            let params = SimulationParameters {
                launch_height: height,
                launch_angle_deg: angle,
                launch_speed: speed,
                gravity,
                rotation: Some(rotation),
                ..Default::default()
            };
            let result = integrate(&params)?;
            if matches!(output, OutputFormat::Table) {
                if let Some((lat, lon)) = landing_lat_lon(&result.points, &rotation) {
                    println!("╔════════════════════════════════════════╗");
                    println!("║          LANDING COORDINATES           ║");
                    println!("╠════════════════════════════════════════╣");
                    println!("║ Latitude:          {:>8.4}°           ║", lat);
                    println!("║ Longitude:         {:>8.4}°           ║", lon);
                    println!("╚════════════════════════════════════════╝");
                }
            }
            display_result(&result, output, full)?;
        }

        Commands::Aim {
            speed,
            target_x,
            target_y,
            gravity,
            samples,
            output,
            full,
        } => {
            let solution = aim(speed, gravity, Target::new(target_x, target_y), samples)?;
            display_aim(&solution, output, full)?;
        }
    }

    Ok(())
}

fn display_result(
    result: &TrajectoryResult,
    format: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }

        OutputFormat::Csv => {
            println!("t,x,y,z,vx,vy,vz,v");
            for p in &result.points {
                println!(
                    "{:.4},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3}",
                    p.t, p.x, p.y, p.z, p.vx, p.vy, p.vz, p.v
                );
            }
        }

        OutputFormat::Table => {
            let s = &result.summary;
            println!("╔════════════════════════════════════════╗");
            println!("║          TRAJECTORY RESULTS            ║");
            println!("╠════════════════════════════════════════╣");
            println!("║ Range:             {:>8.2} m          ║", s.range);
            println!("║ Apogee:            {:>8.2} m          ║", s.apogee_height);
            println!("║ Time of Flight:    {:>8.3} s          ║", s.time_of_flight);
            println!("║ Path Length:       {:>8.2} m          ║", s.distance_traveled);
            println!("║ Termination:       {:>17} ║", format!("{:?}", result.termination));
            println!("╚════════════════════════════════════════╝");

            println!("\nTrajectory points:");
            println!("┌──────────┬──────────┬──────────┬──────────┬──────────┐");
            println!("│ Time (s) │  X (m)   │  Y (m)   │  Z (m)   │ Vel(m/s) │");
            println!("├──────────┼──────────┼──────────┼──────────┼──────────┤");
            let step = if full {
                1
            } else {
                (result.points.len() / 10).max(1)
            };
            for (i, p) in result.points.iter().enumerate() {
                if i % step == 0 || i == result.points.len() - 1 {
                    println!(
                        "│ {:>8.3} │ {:>8.2} │ {:>8.2} │ {:>8.2} │ {:>8.2} │",
                        p.t, p.x, p.y, p.z, p.v
                    );
                }
            }
            println!("└──────────┴──────────┴──────────┴──────────┴──────────┘");
        }
    }

    Ok(())
}

fn display_aim(
    solution: &AimSolution,
    format: OutputFormat,
    full: bool,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(solution)?);
        }

        OutputFormat::Csv => match solution {
            AimSolution::Unreachable { minimum_speed } => {
                println!("reachable,minimum_speed");
                println!("false,{:.3}", minimum_speed);
            }
            AimSolution::Reachable { high, low, minimum } => {
                println!("shot,angle_deg,speed,time_to_target");
                println!("high,{:.4},{:.3},{:.4}", high.angle_deg, high.speed, high.time_to_target);
                println!("low,{:.4},{:.3},{:.4}", low.angle_deg, low.speed, low.time_to_target);
                println!(
                    "minimum,{:.4},{:.3},{:.4}",
                    minimum.angle_deg, minimum.speed, minimum.time_to_target
                );
            }
        },

        OutputFormat::Table => match solution {
            AimSolution::Unreachable { minimum_speed } => {
                println!("╔════════════════════════════════════════╗");
                println!("║          TARGET UNREACHABLE            ║");
                println!("╠════════════════════════════════════════╣");
                println!("║ Required Speed:    {:>8.2} m/s        ║", minimum_speed);
                println!("╚════════════════════════════════════════╝");
            }
            AimSolution::Reachable { high, low, minimum } => {
                println!("╔════════════════════════════════════════╗");
                println!("║           TARGET SOLUTIONS             ║");
                println!("╠════════════════════════════════════════╣");
                println!("║ High Angle:        {:>8.3}°           ║", high.angle_deg);
                println!("║ Low Angle:         {:>8.3}°           ║", low.angle_deg);
                println!("║ Minimum Speed:     {:>8.3} m/s        ║", minimum.speed);
                println!("║ Min-Speed Angle:   {:>8.3}°           ║", minimum.angle_deg);
                println!("╚════════════════════════════════════════╝");

                if full {
                    for (label, shot) in [("HIGH", high), ("LOW", low), ("MINIMUM", minimum)] {
                        println!("\n{label} shot path:");
                        println!("t,x,y");
                        for p in &shot.points {
                            println!("{:.4},{:.3},{:.3}", p.t, p.x, p.y);
                        }
                    }
                }
            }
        },
    }

    Ok(())
}
