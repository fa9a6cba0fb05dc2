pub mod company_commands;
