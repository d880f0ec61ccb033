//! Home command
//!
//! Public landing view for anonymous viewers; logged-in viewers are sent to
//! their role's dashboard.

use anyhow::Result;
use equip_core::{GuardOutcome, SessionGuard};

use super::{view_scope, Context};
use crate::output::print_info;

const LANDING: &str = "\
SchoolEquip
Streamline your school equipment management.

Manage borrowing requests, track equipment usage, and prevent scheduling
conflicts with the equipment lending system.

  Login:    schoolequip session login --token <TOKEN> --role <ROLE>
  Browse:   schoolequip equipment list
  Requests: schoolequip requests list";

pub async fn execute(ctx: &Context) -> Result<()> {
    let guard = SessionGuard::new(ctx.config.redirect_delay);
    let scope = view_scope();

    match guard.check(&ctx.store, &scope).await? {
        GuardOutcome::Landing => {
            print_info(LANDING, ctx.quiet);
        }
        GuardOutcome::Redirect(destination) => {
            print_info(&format!("Redirecting to {}", destination.path()), ctx.quiet);
        }
        GuardOutcome::Cancelled => {
            log::debug!("Home view cancelled before redirect");
        }
    }

    Ok(())
}
