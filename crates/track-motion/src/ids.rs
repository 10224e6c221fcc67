use slotmap::new_key_type;

new_key_type! {
    /// Stable handle of a curve owned by a [`Circuit`](crate::Circuit).
    pub struct CurveId;
    /// Stable handle of an agent owned by a [`Circuit`](crate::Circuit).
    pub struct AgentId;
}
