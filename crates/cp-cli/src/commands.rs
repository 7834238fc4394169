use clap::Subcommand;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Sign in and persist the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Create an account and sign in
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        company: Option<String>,
    },

    /// Forget the persisted session
    Logout,

    /// Restore the session, confirm it with the server and print the user
    Whoami,

    /// Inspect the persisted session without contacting the server
    Status,

    /// Resolve a location through the route guard
    Route {
        /// Location such as /dashboard/chats
        path: String,
    },

    /// Keep the session alive and stream state changes and notifications until Ctrl-C
    Watch,
}
