//! Template-based rendering of characters and titles into nodes.
//!
//! The renderer is a set of pure projections. It never touches the render
//! region itself; the view state machine collects the nodes into a
//! [`Fragment`] and swaps it in during a transition.
//!
//! # Modules
//!
//! - `template`: card and episode templates, slots and affordances
//! - `fragment`: node types and fragments
//! - `cards`: character, episode, button and notice projections

pub mod cards;
pub mod fragment;
pub mod template;

pub use cards::{render_character_card, render_detail_buttons, render_episode_card, render_notice};
pub use fragment::{Fragment, Node, Tone};
pub use template::{
    Affordance, AffordanceTarget, Slot, SlotKind, SlotValue, Template, TemplateNode, Templates,
    Trigger,
};
