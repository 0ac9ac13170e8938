use serde::{Deserialize, Serialize};

pub mod navigation;
pub mod system;

use navigation::NavigationMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function and never carry raw terminal input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Page navigation operations (delegated to PageNavigation)
    Navigation(NavigationMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(_) => false,
            Msg::Navigation(msg) => msg.is_frequent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::page::PageId;

    #[test]
    fn test_msg_frequent_detection() {
        assert!(!Msg::System(SystemMsg::Quit).is_frequent());
        assert!(!Msg::Navigation(NavigationMsg::AppendAtEnd).is_frequent());
        assert!(Msg::Navigation(NavigationMsg::HoverPage(Some(PageId::new("1")))).is_frequent());
    }

    #[test]
    fn test_msg_serialization() {
        let msg = Msg::Navigation(NavigationMsg::InsertAfter(1));
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: Msg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}
