//! Item Migration Engine
//!
//! Applies a completed drag ([`DragEndEvent`]) to the in-memory module
//! list. Exactly one of four rules fires, in precedence order:
//!
//! 1. Module payload: reorder the module list (array move by current id
//!    positions, never cached indices).
//! 2. Item payload dropped on a container zone of a *different* module:
//!    migrate the item, appending to the destination list.
//! 3. Item payload dropped on an item in the *same* container: reorder
//!    within that one list.
//! 4. Item payload dropped on an item in a *different* container: migrate,
//!    inserting immediately before the target item.
//!
//! Everything else is a no-op, including drops with no target and drops on
//! module kinds that are not containers. Only Links and Link-Buttons
//! content participates in item migration.
//!
//! The engine is pure: it takes the current list by value and returns the
//! new list; the caller swaps it atomically. Removal from a source list is
//! always an id filter, never an index splice, so a stale index can never
//! punch a hole in the source container.

use crate::drag::session::{DragEndEvent, DragPayload, DraggableItem, DropTarget};
use crate::models::{ButtonItem, LinkItem, Module, ModuleContent};

/// Fixed palette of gradient tokens for buttons created by migration.
///
/// A link migrating into a Link-Buttons container takes
/// `GRADIENT_PALETTE[destination_len % len]`.
pub const GRADIENT_PALETTE: [&str; 6] = [
    "from-blue-500 to-purple-600",
    "from-emerald-500 to-teal-600",
    "from-orange-500 to-amber-600",
    "from-rose-500 to-pink-600",
    "from-indigo-500 to-sky-600",
    "from-slate-500 to-zinc-600",
];

/// The gradient assigned to the next button appended to a list of
/// `destination_len` buttons.
pub fn next_gradient(destination_len: usize) -> String {
    GRADIENT_PALETTE[destination_len % GRADIENT_PALETTE.len()].to_string()
}

/// Apply a drag-end event to the module list, returning the new list.
///
/// Infallible by design: any event that matches no rule returns the list
/// unchanged. The caller recomputes dirty state from the result either way.
pub fn apply_drag_end(mut modules: Vec<Module>, event: &DragEndEvent) -> Vec<Module> {
    let Some(target) = &event.target else {
        // Dropped outside every valid zone.
        return modules;
    };

    match (&event.payload, target) {
        // Rule 1: module reordering.
        (DragPayload::Module, DropTarget::ModuleCard(over_id)) => {
            if event.active_id != *over_id {
                move_module(&mut modules, &event.active_id, over_id);
            }
        }
        (DragPayload::Module, _) => {}

        // Rule 2: item dropped on a container-level zone.
        (DragPayload::Item(item), DropTarget::ContainerZone(dest_module_id)) => {
            if *dest_module_id != item.source_module_id {
                migrate_item(&mut modules, item, dest_module_id, None);
            }
        }

        // Rules 3 and 4: item dropped on another item.
        (DragPayload::Item(item), DropTarget::Item(over_item_id)) => {
            let source = module_index_containing_item(&modules, &item.id);
            let dest = module_index_containing_item(&modules, over_item_id);
            match (source, dest) {
                (Some(s), Some(d)) if s == d => {
                    reorder_items(&mut modules[s].content, &item.id, over_item_id);
                }
                (Some(_), Some(d)) => {
                    let dest_module_id = modules[d].id.clone();
                    migrate_item(&mut modules, item, &dest_module_id, Some(over_item_id));
                }
                _ => {
                    tracing::debug!(
                        item_id = %item.id,
                        over_item_id = %over_item_id,
                        "item drop with unresolvable container; ignoring"
                    );
                }
            }
        }

        // An item dropped on a module card is not a valid migration target.
        (DragPayload::Item(_), DropTarget::ModuleCard(_)) => {}
    }

    modules
}

/// Classic array move: remove the module at the dragged id's current
/// position and reinsert it at the target id's current position.
fn move_module(modules: &mut Vec<Module>, active_id: &str, over_id: &str) {
    let from = modules.iter().position(|m| m.id == active_id);
    let to = modules.iter().position(|m| m.id == over_id);
    if let (Some(from), Some(to)) = (from, to) {
        let module = modules.remove(from);
        modules.insert(to, module);
    }
}

/// Index of the container module whose item list holds `item_id`.
///
/// Scans current state rather than trusting the payload's
/// `source_module_id`, so a reorder that raced the drag cannot misroute the
/// move. Non-container modules are skipped.
fn module_index_containing_item(modules: &[Module], item_id: &str) -> Option<usize> {
    modules.iter().position(|m| match &m.content {
        ModuleContent::Links { items } => items.iter().any(|i| i.id == item_id),
        ModuleContent::LinkButtons { buttons } => buttons.iter().any(|b| b.id == item_id),
        _ => false,
    })
}

/// Reorder one container's item list by id (array move scoped to the list).
fn reorder_items(content: &mut ModuleContent, active_id: &str, over_id: &str) {
    if active_id == over_id {
        return;
    }
    match content {
        ModuleContent::Links { items } => {
            let from = items.iter().position(|i| i.id == active_id);
            let to = items.iter().position(|i| i.id == over_id);
            if let (Some(from), Some(to)) = (from, to) {
                let item = items.remove(from);
                items.insert(to, item);
            }
        }
        ModuleContent::LinkButtons { buttons } => {
            let from = buttons.iter().position(|b| b.id == active_id);
            let to = buttons.iter().position(|b| b.id == over_id);
            if let (Some(from), Some(to)) = (from, to) {
                let button = buttons.remove(from);
                buttons.insert(to, button);
            }
        }
        _ => {}
    }
}

/// Move an item from its current container into `dest_module_id`,
/// converting its shape to the destination's native item type.
///
/// `insert_before` places the item ahead of that item id in the destination
/// list; `None` appends. The whole operation is a no-op unless the
/// destination is a container, the item is actually present in a source
/// container, and the two containers differ.
fn migrate_item(
    modules: &mut [Module],
    item: &DraggableItem,
    dest_module_id: &str,
    insert_before: Option<&str>,
) {
    let Some(dest_idx) = modules.iter().position(|m| m.id == dest_module_id) else {
        return;
    };
    let Some(source_idx) = module_index_containing_item(modules, &item.id) else {
        return;
    };
    if source_idx == dest_idx {
        return;
    }

    // Reconstruct into the destination's native shape and insert. This runs
    // before the source removal, so a non-container destination exits here
    // with the source list untouched and the item can never be dropped on
    // the floor.
    match &mut modules[dest_idx].content {
        ModuleContent::Links { items } => {
            let link = LinkItem {
                id: item.id.clone(),
                title: item.title.clone(),
                url: item.url.clone(),
                // Crossing from buttons, these come back absent; a
                // link-to-link move keeps what the item carried.
                description: item.description.clone(),
                icon: item.icon.clone(),
            };
            let at = insert_position_links(items, insert_before);
            items.insert(at, link);
        }
        ModuleContent::LinkButtons { buttons } => {
            let gradient = item
                .gradient
                .clone()
                .unwrap_or_else(|| next_gradient(buttons.len()));
            let button = ButtonItem {
                id: item.id.clone(),
                title: item.title.clone(),
                url: item.url.clone(),
                gradient,
            };
            let at = insert_position_buttons(buttons, insert_before);
            buttons.insert(at, button);
        }
        // Not a valid migration target; the drag has no effect.
        _ => return,
    }

    // Remove from the source by id filter, never by index. The dest copy
    // lives in a different module, so it is untouched.
    match &mut modules[source_idx].content {
        ModuleContent::Links { items } => items.retain(|i| i.id != item.id),
        ModuleContent::LinkButtons { buttons } => buttons.retain(|b| b.id != item.id),
        _ => {}
    }

    tracing::debug!(
        item_id = %item.id,
        from = %modules[source_idx].id,
        to = %dest_module_id,
        "migrated item across containers"
    );
}

fn insert_position_links(items: &[LinkItem], insert_before: Option<&str>) -> usize {
    insert_before
        .and_then(|id| items.iter().position(|i| i.id == id))
        .unwrap_or(items.len())
}

fn insert_position_buttons(buttons: &[ButtonItem], insert_before: Option<&str>) -> usize {
    insert_before
        .and_then(|id| buttons.iter().position(|b| b.id == id))
        .unwrap_or(buttons.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::session::{DragSession, DragSource, ItemKind};
    use crate::models::ModuleType;

    fn module(id: &str, content: ModuleContent) -> Module {
        let mut m = Module::new("page-1", ModuleType::RichText, 0);
        m.id = id.to_string();
        m.content = content;
        m
    }

    fn link(id: &str, title: &str) -> LinkItem {
        LinkItem {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("https://example.com/{id}"),
            description: Some(format!("{title} desc")),
            icon: Some("link".to_string()),
        }
    }

    fn button(id: &str, title: &str, gradient: &str) -> ButtonItem {
        ButtonItem {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("/{id}"),
            gradient: gradient.to_string(),
        }
    }

    fn links_module(id: &str, items: Vec<LinkItem>) -> Module {
        module(id, ModuleContent::Links { items })
    }

    fn buttons_module(id: &str, buttons: Vec<ButtonItem>) -> Module {
        module(id, ModuleContent::LinkButtons { buttons })
    }

    fn item_ids(content: &ModuleContent) -> Vec<String> {
        match content {
            ModuleContent::Links { items } => items.iter().map(|i| i.id.clone()).collect(),
            ModuleContent::LinkButtons { buttons } => {
                buttons.iter().map(|b| b.id.clone()).collect()
            }
            _ => vec![],
        }
    }

    fn module_drag(active: &str, target: Option<DropTarget>) -> DragEndEvent {
        let mut session = DragSession::new();
        session.begin(DragSource::ModuleCard {
            module_id: active.to_string(),
        });
        session.end(target).unwrap()
    }

    fn item_drag(item: DraggableItem, target: Option<DropTarget>) -> DragEndEvent {
        let mut session = DragSession::new();
        session.begin(DragSource::Item(item));
        session.end(target).unwrap()
    }

    #[test]
    fn module_reorder_moves_by_current_positions() {
        let modules = vec![
            module("a", ModuleType::RichText.default_content()),
            module("b", ModuleType::Divider.default_content()),
            module("c", ModuleType::Callout.default_content()),
        ];
        let event = module_drag("a", Some(DropTarget::ModuleCard("c".to_string())));
        let out = apply_drag_end(modules, &event);
        let ids: Vec<_> = out.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn module_drop_on_itself_is_a_no_op() {
        let modules = vec![
            module("a", ModuleType::RichText.default_content()),
            module("b", ModuleType::Divider.default_content()),
        ];
        let event = module_drag("a", Some(DropTarget::ModuleCard("a".to_string())));
        let out = apply_drag_end(modules.clone(), &event);
        assert_eq!(out, modules);
    }

    #[test]
    fn drop_without_target_is_a_no_op() {
        let modules = vec![links_module("a", vec![link("l1", "One")])];
        let item = DraggableItem::from_link(&link("l1", "One"), "a");
        let event = item_drag(item, None);
        let out = apply_drag_end(modules.clone(), &event);
        assert_eq!(out, modules);
    }

    #[test]
    fn container_zone_drop_appends_and_converts_link_to_button() {
        let modules = vec![
            links_module("src", vec![link("l1", "Payroll"), link("l2", "Holidays")]),
            buttons_module("dst", vec![button("b1", "Order", GRADIENT_PALETTE[0])]),
        ];
        let item = DraggableItem::from_link(&link("l1", "Payroll"), "src");
        let event = item_drag(item, Some(DropTarget::ContainerZone("dst".to_string())));

        let out = apply_drag_end(modules, &event);
        assert_eq!(item_ids(&out[0].content), ["l2"]);
        assert_eq!(item_ids(&out[1].content), ["b1", "l1"]);

        let ModuleContent::LinkButtons { buttons } = &out[1].content else {
            panic!("destination changed kind");
        };
        let migrated = &buttons[1];
        assert_eq!(migrated.title, "Payroll");
        // Destination held 1 button when the item landed.
        assert_eq!(migrated.gradient, GRADIENT_PALETTE[1]);
    }

    #[test]
    fn gradient_cycles_by_destination_length() {
        let existing: Vec<ButtonItem> = (0..GRADIENT_PALETTE.len())
            .map(|i| button(&format!("b{i}"), "B", GRADIENT_PALETTE[i % GRADIENT_PALETTE.len()]))
            .collect();
        let modules = vec![
            links_module("src", vec![link("l1", "Wraps")]),
            buttons_module("dst", existing),
        ];
        let item = DraggableItem::from_link(&link("l1", "Wraps"), "src");
        let event = item_drag(item, Some(DropTarget::ContainerZone("dst".to_string())));

        let out = apply_drag_end(modules, &event);
        let ModuleContent::LinkButtons { buttons } = &out[1].content else {
            panic!("destination changed kind");
        };
        // len == palette size, so the cycle wraps to the first color.
        assert_eq!(buttons.last().unwrap().gradient, GRADIENT_PALETTE[0]);
    }

    #[test]
    fn container_zone_drop_on_own_container_is_a_no_op() {
        let modules = vec![links_module("src", vec![link("l1", "One"), link("l2", "Two")])];
        let item = DraggableItem::from_link(&link("l1", "One"), "src");
        let event = item_drag(item, Some(DropTarget::ContainerZone("src".to_string())));
        let out = apply_drag_end(modules.clone(), &event);
        assert_eq!(out, modules);
    }

    #[test]
    fn same_container_item_drop_reorders_preserving_membership() {
        let modules = vec![links_module(
            "src",
            vec![link("l1", "One"), link("l2", "Two"), link("l3", "Three")],
        )];
        let item = DraggableItem::from_link(&link("l1", "One"), "src");
        let event = item_drag(item, Some(DropTarget::Item("l3".to_string())));

        let out = apply_drag_end(modules, &event);
        assert_eq!(item_ids(&out[0].content), ["l2", "l3", "l1"]);
    }

    #[test]
    fn cross_container_item_drop_inserts_before_target() {
        let modules = vec![
            links_module("src", vec![link("l1", "One")]),
            buttons_module(
                "dst",
                vec![
                    button("b1", "First", GRADIENT_PALETTE[0]),
                    button("b2", "Second", GRADIENT_PALETTE[1]),
                ],
            ),
        ];
        let item = DraggableItem::from_link(&link("l1", "One"), "src");
        let event = item_drag(item, Some(DropTarget::Item("b2".to_string())));

        let out = apply_drag_end(modules, &event);
        assert_eq!(item_ids(&out[0].content), Vec::<String>::new());
        assert_eq!(item_ids(&out[1].content), ["b1", "l1", "b2"]);
    }

    #[test]
    fn button_to_links_round_trip_restores_shape() {
        // Link -> Button -> Link must preserve title and url, drop the
        // gradient, and come back with empty description/icon.
        let original = link("l1", "Payroll");
        let modules = vec![
            links_module("a", vec![original.clone()]),
            buttons_module("b", vec![]),
        ];

        let to_button = item_drag(
            DraggableItem::from_link(&original, "a"),
            Some(DropTarget::ContainerZone("b".to_string())),
        );
        let modules = apply_drag_end(modules, &to_button);

        let ModuleContent::LinkButtons { buttons } = &modules[1].content else {
            panic!("first hop failed");
        };
        assert_eq!(buttons[0].gradient, GRADIENT_PALETTE[0]);

        let back = item_drag(
            DraggableItem::from_button(&buttons[0], "b"),
            Some(DropTarget::ContainerZone("a".to_string())),
        );
        let modules = apply_drag_end(modules, &back);

        let ModuleContent::Links { items } = &modules[0].content else {
            panic!("return hop failed");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, original.id);
        assert_eq!(items[0].title, original.title);
        assert_eq!(items[0].url, original.url);
        assert_eq!(items[0].description, None, "gradient trip drops description");
        assert_eq!(items[0].icon, None);
        assert!(item_ids(&modules[1].content).is_empty());
    }

    #[test]
    fn non_container_module_is_not_a_migration_target() {
        let modules = vec![
            links_module("src", vec![link("l1", "One")]),
            module("gallery", ModuleType::Gallery.default_content()),
        ];
        let item = DraggableItem::from_link(&link("l1", "One"), "src");
        let event = item_drag(item, Some(DropTarget::ContainerZone("gallery".to_string())));
        let out = apply_drag_end(modules.clone(), &event);
        assert_eq!(out, modules, "gallery must not receive migrated items");
    }

    #[test]
    fn item_drop_on_module_card_is_a_no_op() {
        let modules = vec![
            links_module("src", vec![link("l1", "One")]),
            buttons_module("dst", vec![]),
        ];
        let item = DraggableItem::from_link(&link("l1", "One"), "src");
        let event = item_drag(item, Some(DropTarget::ModuleCard("dst".to_string())));
        let out = apply_drag_end(modules.clone(), &event);
        assert_eq!(out, modules);
    }

    #[test]
    fn stale_item_not_present_anywhere_is_a_no_op() {
        let modules = vec![
            links_module("src", vec![link("l1", "One")]),
            buttons_module("dst", vec![]),
        ];
        let ghost = DraggableItem {
            id: "ghost".to_string(),
            title: "Ghost".to_string(),
            url: "https://example.com/ghost".to_string(),
            description: None,
            icon: None,
            gradient: None,
            source_module_id: "src".to_string(),
            kind: ItemKind::Link,
        };
        let event = item_drag(ghost, Some(DropTarget::ContainerZone("dst".to_string())));
        let out = apply_drag_end(modules.clone(), &event);
        assert_eq!(out, modules);
    }

    #[test]
    fn button_reorder_within_buttons_module() {
        let modules = vec![buttons_module(
            "m",
            vec![
                button("b1", "One", GRADIENT_PALETTE[0]),
                button("b2", "Two", GRADIENT_PALETTE[1]),
                button("b3", "Three", GRADIENT_PALETTE[2]),
            ],
        )];
        let ModuleContent::LinkButtons { buttons } = &modules[0].content else {
            unreachable!();
        };
        let item = DraggableItem::from_button(&buttons[2], "m");
        let event = item_drag(item, Some(DropTarget::Item("b1".to_string())));

        let out = apply_drag_end(modules, &event);
        assert_eq!(item_ids(&out[0].content), ["b3", "b1", "b2"]);
    }
}
