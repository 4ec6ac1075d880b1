#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Everything is spawned and drawn, but frozen until the start key.
    Ready,
    Running,
}
