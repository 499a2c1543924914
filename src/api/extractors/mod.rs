pub mod wizard_session;
