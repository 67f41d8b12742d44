//! Rising/falling edge detection over a polled boolean signal.

/// Transition observed between two consecutive polls of a boolean signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Edge {
    /// No transition.
    #[default]
    None,
    /// false → true.
    Rising,
    /// true → false.
    Falling,
}

/// Classifies a polled boolean stream into [`Edge`]s.
///
/// Construct with the *actual* current signal level — seeding with a guess
/// would report a phantom edge on the first [`update`](Self::update).
#[derive(Debug, Clone)]
pub struct EdgeDetector {
    last_state: bool,
    last_edge: Edge,
}

impl EdgeDetector {
    pub fn new(initial_state: bool) -> Self {
        Self {
            last_state: initial_state,
            last_edge: Edge::None,
        }
    }

    /// Call once per tick with the current signal level.
    ///
    /// Returns the edge between the previous call's level and this one.
    pub fn update(&mut self, current: bool) -> Edge {
        self.last_edge = match (self.last_state, current) {
            (false, true) => Edge::Rising,
            (true, false) => Edge::Falling,
            _ => Edge::None,
        };
        self.last_state = current;
        self.last_edge
    }

    /// The edge computed by the most recent [`update`](Self::update).
    pub fn edge(&self) -> Edge {
        self.last_edge
    }
}
