//! Outlet selection
//!
//! The selected outlet lives in [`AppContext`] so it survives restarts.
//! When no outlet is selected, the terminal asks for one exactly once per
//! session, unless the user has parked the prompt to create a new outlet
//! (`suppress_outlet_prompt`). Changing from one outlet to another empties
//! the cart and drops staged table state, since cart lines belong to the
//! outlet they were rung up at.

use shared::models::Outlet;
use tracing::info;

use crate::cart::Cart;
use crate::checkout::Staging;
use crate::context::AppContext;

/// What a selection did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutletChange {
    /// First outlet of the session (nothing was selected)
    Initial,
    /// Same outlet selected again
    Unchanged,
    /// Moved from another outlet; cart and staging were cleared
    Switched { from: i64 },
}

/// Progress reported by the outlet tax setup form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxSetupStatus {
    Idle,
    Saving,
    Failed,
}

/// Session-scoped prompt state
#[derive(Debug, Default)]
pub struct OutletSelection {
    prompted: bool,
    prompt_open: bool,
}

impl OutletSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called whenever the outlet list arrives; `true` means show the prompt
    pub fn on_outlets_loaded(&mut self, ctx: &AppContext) -> bool {
        if self.prompted || ctx.selected_outlet_id.is_some() || ctx.suppress_outlet_prompt {
            return false;
        }
        self.prompted = true;
        self.prompt_open = true;
        true
    }

    pub fn is_prompt_open(&self) -> bool {
        self.prompt_open
    }

    pub fn select(
        &mut self,
        ctx: &mut AppContext,
        outlet: &Outlet,
        cart: &mut Cart,
        staging: &mut Staging,
    ) -> OutletChange {
        let previous = ctx.selected_outlet_id;
        ctx.set_outlet(outlet.summary());
        self.prompt_open = false;

        match previous {
            None => {
                info!(outlet_id = outlet.id, "outlet selected");
                OutletChange::Initial
            }
            Some(id) if id == outlet.id => OutletChange::Unchanged,
            Some(from) => {
                cart.clear();
                staging.clear();
                info!(from, to = outlet.id, "outlet switched, cart cleared");
                OutletChange::Switched { from }
            }
        }
    }

    /// Park the prompt while the user creates an outlet
    pub fn defer_for_new_outlet(&mut self, ctx: &mut AppContext) {
        ctx.suppress_outlet_prompt = true;
        self.prompt_open = false;
    }

    /// Release the parked prompt once tax setup has settled
    pub fn on_tax_setup_status(&mut self, ctx: &mut AppContext, status: TaxSetupStatus) {
        if status == TaxSetupStatus::Idle && ctx.suppress_outlet_prompt {
            ctx.suppress_outlet_prompt = false;
            info!("outlet prompt released");
        }
    }
}
