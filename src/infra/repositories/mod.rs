pub mod memory_wizard_repo;
