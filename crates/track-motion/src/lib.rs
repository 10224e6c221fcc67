//! trackline motion: agents that lap a spline and the poses they produce.

pub mod agent;
pub mod circuit;
pub mod ids;
pub mod pose;

pub use agent::MotionAgent;
pub use circuit::Circuit;
pub use ids::{AgentId, CurveId};
pub use pose::Pose;
