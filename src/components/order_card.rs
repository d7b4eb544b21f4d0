//! Order Card Component
//!
//! Draggable card showing one order. Clicking the card or pressing Enter
//! on it opens the order; the action links go to their own pages.

use leptos::prelude::*;
use leptos_dragdrop::*;

use kavaar_board::{Item, Stage};

use crate::context::use_board_context;
use crate::navigation::{navigate, CardAction};

/// Enter opens the card only when the card itself has focus; keys bubbling
/// up from the action links keep their own behaviour
fn opens_card(key: &str, on_card_itself: bool) -> bool {
    key == "Enter" && on_card_itself
}

fn card_class(is_dragging: bool, is_over: bool) -> String {
    let mut c = String::from("order-card");
    if is_dragging {
        c.push_str(" dragging");
    }
    if is_over {
        c.push_str(" drop-target");
    }
    c
}

/// Card body, shared with the drag preview
#[component]
pub fn CardSummary(item: Item) -> impl IntoView {
    let eta = item.eta.clone().map(|eta| view! { <span class="card-eta">{format!("ETA {}", eta)}</span> });
    let byline = format!("{} • {}", item.id, item.counterparty);
    let amount = item.amount.clone().map(|amount| view! { <span class="card-amount">{amount}</span> });

    view! {
        <div class="card-top">
            <h3 class="card-title">{item.title.clone()}</h3>
            {amount}
        </div>
        <p class="card-byline">{byline}</p>
        <div class="card-meta">
            <div class="card-tags">
                {item
                    .tags
                    .iter()
                    .map(|tag| {
                        let class = format!("badge badge-{}", tag.tone.as_str());
                        view! { <span class=class>{tag.label.clone()}</span> }
                    })
                    .collect_view()}
            </div>
            {eta}
        </div>
    }
}

#[component]
pub fn OrderCard(item: Item, stage: Stage) -> impl IntoView {
    let ctx = use_board_context();
    let dnd = ctx.dnd;
    let id = item.id.to_string();
    let open_href = CardAction::Open.href(&item.id);

    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, id.clone());
    let on_mouseleave = make_on_item_mouseleave(dnd, stage.as_str().to_string());

    let is_dragging = {
        let id = id.clone();
        move || dnd.dragging_id_read.get().as_deref() == Some(id.as_str())
    };
    let is_over = {
        let id = id.clone();
        move || matches!(dnd.drop_target_read.get(), Some(DropTarget::Item(tid)) if tid == id)
    };

    let on_click = {
        let href = open_href.clone();
        move |_| {
            // A drop ends with a click on the card under the pointer
            if dnd.drag_just_ended_read.get_untracked() {
                return;
            }
            navigate(&href);
        }
    };
    let on_keydown = {
        let href = open_href.clone();
        move |ev: web_sys::KeyboardEvent| {
            if opens_card(&ev.key(), ev.target() == ev.current_target()) {
                ev.prevent_default();
                navigate(&href);
            }
        }
    };

    let actions = CardAction::ALL
        .iter()
        .map(|action| {
            view! {
                <a
                    class=action.class()
                    href=action.href(&item.id)
                    on:click=|ev| ev.stop_propagation()
                >
                    {action.label()}
                </a>
            }
        })
        .collect_view();

    view! {
        <article
            class=move || card_class(is_dragging(), is_over())
            tabindex="0"
            data-id=id.clone()
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
            on:click=on_click
            on:keydown=on_keydown
        >
            <CardSummary item=item.clone() />
            <div class="card-actions">{actions}</div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_from_action_link_is_left_alone() {
        assert!(opens_card("Enter", true));
        assert!(!opens_card("Enter", false));
        assert!(!opens_card(" ", true));
        assert!(!opens_card("Escape", true));
    }

    #[test]
    fn test_card_class() {
        assert_eq!(card_class(false, false), "order-card");
        assert_eq!(card_class(true, false), "order-card dragging");
        assert_eq!(card_class(false, true), "order-card drop-target");
        assert_eq!(card_class(true, true), "order-card dragging drop-target");
    }
}
