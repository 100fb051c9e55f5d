/// Screen modules
///
/// One module per screen, each owning its own transient state:
/// - Navigation menu and procedure/view catalog links (menu.rs)
/// - Generic procedure form (procedure.rs)
/// - Read-only view tables (view_table.rs)
/// - Backend health check (health.rs)
///
/// Screens never share state; leaving one discards it.

pub mod health;
pub mod menu;
pub mod procedure;
pub mod view_table;
