mod match_add;
mod match_events;

pub use match_add::EditorMatchAdd;
pub use match_events::EditorMatchEvents;
