//! Drag Session Tracker
//!
//! Interprets pointer/keyboard drag gestures into structured start/over/end
//! events. The tracker is a two-state machine:
//!
//! ```text
//! Idle -> Dragging(payload) -> Idle
//! ```
//!
//! Over-events are advisory (drop-zone highlighting in the host UI) and
//! never mutate anything; only the drag-end event commits state, and it is
//! handed to the migration engine as a single [`DragEndEvent`]. The tracker
//! returns to `Idle` unconditionally after `end`, even when the drop landed
//! outside any valid target.
//!
//! Drop targets are tagged values ([`DropTarget`]) produced by the host
//! layer, not prefix-parsed strings, so "container zone vs. existing item"
//! is decided by construction.

use crate::models::{ButtonItem, LinkItem};

/// Which native shape a dragged sub-item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Link,
    Button,
}

/// Normalized transient view of a sub-item during a drag session.
///
/// Unifies [`LinkItem`] and [`ButtonItem`] so the migration engine can move
/// an item between container kinds. Exists only in memory for the duration
/// of the drag; it is reconstructed into the target container's native
/// shape on drop.
#[derive(Debug, Clone, PartialEq)]
pub struct DraggableItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub gradient: Option<String>,
    /// Module the item was picked up from.
    pub source_module_id: String,
    pub kind: ItemKind,
}

impl DraggableItem {
    /// Normalize a link item for dragging.
    pub fn from_link(item: &LinkItem, source_module_id: impl Into<String>) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            url: item.url.clone(),
            description: item.description.clone(),
            icon: item.icon.clone(),
            gradient: None,
            source_module_id: source_module_id.into(),
            kind: ItemKind::Link,
        }
    }

    /// Normalize a button item for dragging.
    pub fn from_button(item: &ButtonItem, source_module_id: impl Into<String>) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            url: item.url.clone(),
            description: None,
            icon: None,
            gradient: Some(item.gradient.clone()),
            source_module_id: source_module_id.into(),
            kind: ItemKind::Button,
        }
    }
}

/// Data attached to the element a drag started on.
#[derive(Debug, Clone, PartialEq)]
pub enum DragSource {
    /// A module card on the page grid.
    ModuleCard { module_id: String },
    /// A sub-item inside a container module.
    Item(DraggableItem),
}

/// Payload carried through a drag session.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPayload {
    /// A whole module is being reordered.
    Module,
    /// A container sub-item is being moved.
    Item(DraggableItem),
}

/// Where a drag is hovering or was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Another module card (module reordering).
    ModuleCard(String),
    /// The container-level zone of a module, by module id.
    ContainerZone(String),
    /// An existing sub-item, by item id.
    Item(String),
}

/// The single structured result of a completed drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragEndEvent {
    /// Id of the dragged module or item.
    pub active_id: String,
    /// Drop target, if the pointer was released over one.
    pub target: Option<DropTarget>,
    pub payload: DragPayload,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Idle,
    Dragging {
        active_id: String,
        payload: DragPayload,
    },
}

/// Tracks one drag gesture at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    state: State,
}

impl DragSession {
    pub fn new() -> Self {
        Self { state: State::Idle }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, State::Dragging { .. })
    }

    /// Enter `Dragging` by inspecting the dragged element's attached data.
    ///
    /// A `begin` while already dragging replaces the stale session; pointer
    /// capture loss can swallow the matching end event.
    pub fn begin(&mut self, source: DragSource) {
        if self.is_dragging() {
            tracing::warn!("drag began while a previous session was active; replacing it");
        }
        self.state = match source {
            DragSource::ModuleCard { module_id } => State::Dragging {
                active_id: module_id,
                payload: DragPayload::Module,
            },
            DragSource::Item(item) => State::Dragging {
                active_id: item.id.clone(),
                payload: DragPayload::Item(item),
            },
        };
    }

    /// Advisory hover notification.
    ///
    /// Returns the target back to the caller for highlight rendering while
    /// a drag is active, and `None` otherwise. Never mutates session state;
    /// only [`end`](Self::end) commits.
    pub fn over(&self, target: Option<DropTarget>) -> Option<DropTarget> {
        if self.is_dragging() {
            target
        } else {
            None
        }
    }

    /// Complete the drag, emitting the event for the migration engine.
    ///
    /// Returns to `Idle` unconditionally. Returns `None` when no drag was
    /// active. A `target` of `None` (dropped outside every zone) still
    /// produces an event; the migration engine treats it as a no-op.
    pub fn end(&mut self, target: Option<DropTarget>) -> Option<DragEndEvent> {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle => None,
            State::Dragging { active_id, payload } => {
                tracing::debug!(
                    active_id = %active_id,
                    has_target = target.is_some(),
                    "drag ended"
                );
                Some(DragEndEvent {
                    active_id,
                    target,
                    payload,
                })
            }
        }
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_item() -> LinkItem {
        LinkItem {
            id: "item-1".to_string(),
            title: "Payroll".to_string(),
            url: "https://payroll.example.com".to_string(),
            description: Some("Monthly runs".to_string()),
            icon: Some("banknote".to_string()),
        }
    }

    #[test]
    fn module_drag_round_trip() {
        let mut session = DragSession::new();
        assert!(!session.is_dragging());

        session.begin(DragSource::ModuleCard {
            module_id: "mod-a".to_string(),
        });
        assert!(session.is_dragging());

        let event = session
            .end(Some(DropTarget::ModuleCard("mod-b".to_string())))
            .unwrap();
        assert_eq!(event.active_id, "mod-a");
        assert_eq!(event.payload, DragPayload::Module);
        assert_eq!(event.target, Some(DropTarget::ModuleCard("mod-b".to_string())));
        assert!(!session.is_dragging());
    }

    #[test]
    fn item_drag_carries_the_normalized_item() {
        let mut session = DragSession::new();
        let item = DraggableItem::from_link(&link_item(), "mod-a");
        session.begin(DragSource::Item(item.clone()));

        let event = session
            .end(Some(DropTarget::ContainerZone("mod-b".to_string())))
            .unwrap();
        assert_eq!(event.active_id, "item-1");
        assert_eq!(event.payload, DragPayload::Item(item));
    }

    #[test]
    fn end_without_target_still_emits_and_resets() {
        let mut session = DragSession::new();
        session.begin(DragSource::ModuleCard {
            module_id: "mod-a".to_string(),
        });
        let event = session.end(None).unwrap();
        assert_eq!(event.target, None);
        assert!(!session.is_dragging());
    }

    #[test]
    fn end_while_idle_is_a_no_op() {
        let mut session = DragSession::new();
        assert!(session.end(Some(DropTarget::Item("x".to_string()))).is_none());
    }

    #[test]
    fn over_is_advisory_only() {
        let mut session = DragSession::new();
        assert_eq!(session.over(Some(DropTarget::Item("x".to_string()))), None);

        session.begin(DragSource::ModuleCard {
            module_id: "mod-a".to_string(),
        });
        let snapshot = session.clone();
        let hover = session.over(Some(DropTarget::ContainerZone("mod-b".to_string())));
        assert_eq!(hover, Some(DropTarget::ContainerZone("mod-b".to_string())));
        assert_eq!(session, snapshot, "over must not mutate session state");
    }

    #[test]
    fn button_normalization_keeps_gradient() {
        let button = ButtonItem {
            id: "b1".to_string(),
            title: "Submit order".to_string(),
            url: "/orders/new".to_string(),
            gradient: "from-blue-500 to-purple-600".to_string(),
        };
        let item = DraggableItem::from_button(&button, "mod-b");
        assert_eq!(item.kind, ItemKind::Button);
        assert_eq!(item.gradient.as_deref(), Some("from-blue-500 to-purple-600"));
        assert_eq!(item.description, None);
        assert_eq!(item.icon, None);
    }
}
