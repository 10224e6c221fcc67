//! Arena owning curves and the agents that ride them.

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;
use track_core::error::{Result, TrackError};
use track_core::{AgentConfig, DriveMode};
use track_spline::Spline;

use crate::agent::MotionAgent;
use crate::ids::{AgentId, CurveId};
use crate::pose::Pose;

/// Curves and agents addressed by stable handles.
///
/// Agents refer to their curve by [`CurveId`]. Removing a curve removes its
/// agents with it, so a live agent always has a live curve.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Circuit {
    curves: SlotMap<CurveId, Spline>,
    agents: SlotMap<AgentId, MotionAgent>,
}

impl Circuit {
    pub fn new() -> Self {
        Self {
            curves: SlotMap::with_key(),
            agents: SlotMap::with_key(),
        }
    }

    // --- Curves ---

    pub fn add_curve(&mut self, spline: Spline) -> CurveId {
        self.curves.insert(spline)
    }

    pub fn curve(&self, id: CurveId) -> Result<&Spline> {
        self.curves
            .get(id)
            .ok_or_else(|| TrackError::NotFound(format!("curve {id:?}")))
    }

    /// Mutable access for the editor. Agents see the edit on their next query.
    pub fn curve_mut(&mut self, id: CurveId) -> Result<&mut Spline> {
        self.curves
            .get_mut(id)
            .ok_or_else(|| TrackError::NotFound(format!("curve {id:?}")))
    }

    /// Remove a curve and every agent riding it.
    pub fn remove_curve(&mut self, id: CurveId) -> Result<Spline> {
        let spline = self
            .curves
            .remove(id)
            .ok_or_else(|| TrackError::NotFound(format!("curve {id:?}")))?;
        let before = self.agents.len();
        self.agents.retain(|_, agent| agent.curve() != id);
        log::debug!(
            "removed curve {id:?} and {} agent(s) riding it",
            before - self.agents.len()
        );
        Ok(spline)
    }

    pub fn curves(&self) -> impl Iterator<Item = (CurveId, &Spline)> {
        self.curves.iter()
    }

    pub fn curve_count(&self) -> usize {
        self.curves.len()
    }

    // --- Agents ---

    pub fn create_agent(
        &mut self,
        curve: CurveId,
        start_time: f64,
        drive_mode: DriveMode,
        speed: f64,
    ) -> Result<AgentId> {
        self.insert_agent(MotionAgent::new(curve, start_time, drive_mode, speed)?)
    }

    pub fn create_agent_with(&mut self, curve: CurveId, config: &AgentConfig) -> Result<AgentId> {
        self.insert_agent(MotionAgent::from_config(curve, config)?)
    }

    fn insert_agent(&mut self, agent: MotionAgent) -> Result<AgentId> {
        self.curve(agent.curve())?;
        let id = self.agents.insert(agent);
        log::debug!(
            "agent {id:?} joined curve {:?} ({} drive, speed {})",
            agent.curve(),
            agent.drive_mode(),
            agent.speed()
        );
        Ok(id)
    }

    pub fn agent(&self, id: AgentId) -> Result<&MotionAgent> {
        self.agents
            .get(id)
            .ok_or_else(|| TrackError::NotFound(format!("agent {id:?}")))
    }

    pub fn agent_mut(&mut self, id: AgentId) -> Result<&mut MotionAgent> {
        self.agents
            .get_mut(id)
            .ok_or_else(|| TrackError::NotFound(format!("agent {id:?}")))
    }

    pub fn remove_agent(&mut self, id: AgentId) -> Result<MotionAgent> {
        let agent = self
            .agents
            .remove(id)
            .ok_or_else(|| TrackError::NotFound(format!("agent {id:?}")))?;
        log::debug!("agent {id:?} left curve {:?}", agent.curve());
        Ok(agent)
    }

    pub fn agents_on(&self, curve: CurveId) -> impl Iterator<Item = (AgentId, &MotionAgent)> {
        self.agents
            .iter()
            .filter(move |(_, agent)| agent.curve() == curve)
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    // --- Ticks ---

    /// Pose of one agent at time `t`.
    pub fn pose_of(&self, id: AgentId, t: f64) -> Result<Pose> {
        let agent = self.agent(id)?;
        let spline = self.curve(agent.curve())?;
        Ok(agent.pose_at(spline, t))
    }

    /// Pose every agent for one tick at time `t`.
    pub fn update(&self, t: f64) -> Vec<(AgentId, Pose)> {
        self.agents
            .iter()
            .filter_map(|(id, agent)| {
                let spline = self.curves.get(agent.curve())?;
                Some((id, agent.pose_at(spline, t)))
            })
            .collect()
    }
}
