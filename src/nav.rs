/// Outcome of a step's interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCode {
    Next,
    Previous,
    StartOver,
    End,
    Quit,
    Help,
}

/// Command characters accepted at a leaf step, in prompt order.
pub const COMMANDS: [char; 6] = ['n', 'p', 's', 'e', 'q', 'h'];

/// Command used when the user just presses Enter.
pub const DEFAULT_COMMAND: char = 'n';

impl NavCode {
    pub fn from_command(c: char) -> Option<NavCode> {
        match c {
            'n' => Some(NavCode::Next),
            'p' => Some(NavCode::Previous),
            's' => Some(NavCode::StartOver),
            'e' => Some(NavCode::End),
            'q' => Some(NavCode::Quit),
            'h' => Some(NavCode::Help),
            _ => None,
        }
    }
}
