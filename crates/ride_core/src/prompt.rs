//! Two-choice confirmation boundary for cancellations.
//!
//! `CancelRequested` populates [PendingPrompt]; the prompt collaborator (the
//! shell dialog, or a test script) answers through [deliver_cancel_choice],
//! which enqueues the matching decision event. The destructive branch only
//! ever runs after an explicit confirm choice.

use bevy_ecs::prelude::{Resource, World};

use crate::events::{EventKind, InteractionQueue};
use crate::session::Role;

/// Confirmation request shown before a cancellation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelPrompt {
    pub title: String,
    pub message: String,
    pub keep_label: String,
    pub confirm_label: String,
}

impl CancelPrompt {
    pub fn for_role(role: Role) -> Self {
        let message = match role {
            Role::Driver => {
                "Êtes-vous sûr de vouloir annuler cette course ? \
                 Le client sera notifié de l'annulation."
            }
            Role::Client => {
                "Êtes-vous sûr de vouloir annuler cette course ? \
                 Des frais d'annulation peuvent s'appliquer."
            }
        };
        Self {
            title: "Annuler la course ?".to_owned(),
            message: message.to_owned(),
            keep_label: "Non, continuer".to_owned(),
            confirm_label: "Oui, annuler".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelChoice {
    Keep,
    Confirm,
}

/// The outstanding confirmation, if any. At most one at a time; a second
/// `CancelRequested` while one is pending is ignored.
#[derive(Debug, Default, Resource)]
pub struct PendingPrompt(pub Option<CancelPrompt>);

/// Resolve the outstanding prompt with the user's choice and enqueue the
/// decision as the next discrete event. Dismissing the dialog without
/// choosing maps to [CancelChoice::Keep]. Returns `false` (and changes
/// nothing) when no prompt is outstanding.
pub fn deliver_cancel_choice(world: &mut World, choice: CancelChoice) -> bool {
    {
        let mut pending = world.resource_mut::<PendingPrompt>();
        if pending.0.take().is_none() {
            return false;
        }
    }

    let kind = match choice {
        CancelChoice::Keep => EventKind::CancelDismissed,
        CancelChoice::Confirm => EventKind::CancelConfirmed,
    };
    world.resource_mut::<InteractionQueue>().push(kind);
    true
}
