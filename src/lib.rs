pub mod dynamics;
pub mod integrator;
pub mod io;
pub mod sim;
pub mod types;

pub use integrator::{euler_step, rk2_step, Method, SimError};
pub use sim::{simulate, simulate_trajectory};
pub use types::{Launch, State, Trajectory, G, MAX_STEPS};
