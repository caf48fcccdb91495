//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Command-line client for Bugzilla-style bug trackers
#[derive(Parser, Debug)]
#[command(name = "bugz")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "use -h after a sub-command for sub-command specific help")]
pub struct Cli {
    /// Base URL of the bug tracker
    #[arg(short, long, default_value = crate::domain::invocation::DEFAULT_BASE)]
    pub base: String,

    /// Username for commands requiring authentication
    #[arg(short, long)]
    pub user: Option<String>,

    /// Password for commands requiring authentication
    #[arg(short, long)]
    pub password: Option<String>,

    /// Username for basic HTTP auth
    #[arg(short = 'H', long)]
    pub httpuser: Option<String>,

    /// Password for basic HTTP auth
    #[arg(short = 'P', long)]
    pub httppassword: Option<String>,

    /// Forget login after execution
    #[arg(short, long)]
    pub forget: bool,

    /// Quiet mode
    #[arg(short, long)]
    pub quiet: bool,

    /// Maximum number of columns output should use (0 = unconstrained)
    #[arg(long, default_value_t = 0)]
    pub columns: u32,

    /// Output encoding (default: utf-8)
    #[arg(long)]
    pub encoding: Option<String>,

    /// Skip authentication
    #[arg(long)]
    pub skip_auth: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Attach a file to a bug
    Attach {
        /// ID of the bug the file is attached to
        bugid: String,
        /// File to attach
        #[arg(value_hint = ValueHint::FilePath)]
        filename: PathBuf,
        /// Mimetype of the file
        #[arg(short, long, default_value = "text/plain")]
        content_type: String,
        /// Description of the attachment
        #[arg(short, long)]
        description: Option<String>,
        /// Attachment is a patch
        #[arg(short, long)]
        patch: bool,
    },

    /// Retrieve an attachment
    Attachment {
        /// ID of the attachment
        attachid: String,
        /// Print the attachment rather than save it
        #[arg(short, long)]
        view: bool,
    },

    /// Retrieve a bug
    Get {
        /// ID of the bug to retrieve
        bugid: String,
        /// Do not show attachments
        #[arg(short = 'a', long)]
        no_attachments: bool,
        /// Do not show comments
        #[arg(short = 'n', long)]
        no_comments: bool,
    },

    /// Modify a bug (e.g. post a comment)
    Modify(ModifyArgs),

    /// Run a search stored on the server
    Namedcmd {
        /// Name of the stored search
        command: String,
        /// Show the status of bugs
        #[arg(long)]
        show_status: bool,
        /// Show bug ids as URLs
        #[arg(long)]
        show_url: bool,
    },

    /// File a new bug
    Post(PostArgs),

    /// Search for bugs
    Search(SearchArgs),
}

#[derive(Args, Debug)]
pub struct ModifyArgs {
    /// ID of the bug to modify
    pub bugid: String,

    /// Change the assignee of this bug
    #[arg(short, long)]
    pub assigned_to: Option<String>,

    /// Add a comment via the default editor
    #[arg(short = 'C', long)]
    pub comment_editor: bool,

    /// Add a comment from a file; with -C the editor opens on its contents
    #[arg(short = 'F', long, value_hint = ValueHint::FilePath)]
    pub comment_from: Option<PathBuf>,

    /// Add a comment from the command line
    #[arg(short, long)]
    pub comment: Option<String>,

    /// This bug is a duplicate of the given bug
    #[arg(short, long, default_value_t = 0)]
    pub duplicate: i64,

    /// Set bug keywords
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Change the priority of this bug
    #[arg(long)]
    pub priority: Option<String>,

    /// Set a new resolution (only if status = RESOLVED)
    #[arg(short, long)]
    pub resolution: Option<String>,

    /// Set a new status (e.g. RESOLVED)
    #[arg(short, long)]
    pub status: Option<String>,

    /// Set the severity of this bug
    #[arg(short = 'S', long)]
    pub severity: Option<String>,

    /// Set the title of the bug
    #[arg(short, long)]
    pub title: Option<String>,

    /// Set the URL field of the bug
    #[arg(short = 'U', long)]
    pub url: Option<String>,

    /// Set the status whiteboard
    #[arg(short, long)]
    pub whiteboard: Option<String>,

    /// Add an email to the CC list (repeatable)
    #[arg(long)]
    pub add_cc: Vec<String>,

    /// Remove an email from the CC list (repeatable)
    #[arg(long)]
    pub remove_cc: Vec<String>,

    /// Add a bug to the depends list (repeatable)
    #[arg(long)]
    pub add_dependson: Vec<String>,

    /// Remove a bug from the depends list (repeatable)
    #[arg(long)]
    pub remove_dependson: Vec<String>,

    /// Add a bug to the blocked list (repeatable)
    #[arg(long)]
    pub add_blocked: Vec<String>,

    /// Remove a bug from the blocked list (repeatable)
    #[arg(long)]
    pub remove_blocked: Vec<String>,

    /// Change the component of this bug
    #[arg(long)]
    pub component: Option<String>,

    /// Mark the bug RESOLVED, FIXED
    #[arg(long)]
    pub fixed: bool,

    /// Mark the bug RESOLVED, INVALID
    #[arg(long)]
    pub invalid: bool,
}

#[derive(Args, Debug)]
pub struct PostArgs {
    /// Product
    #[arg(long)]
    pub product: Option<String>,

    /// Component
    #[arg(long)]
    pub component: Option<String>,

    /// Version of the product
    #[arg(long)]
    pub prodversion: Option<String>,

    /// Title of the bug
    #[arg(short, long)]
    pub title: Option<String>,

    /// Description of the bug
    #[arg(short, long)]
    pub description: Option<String>,

    /// Description from the contents of a file
    #[arg(short = 'F', long, value_hint = ValueHint::FilePath)]
    pub description_from: Option<PathBuf>,

    /// Append the output of a command to the description
    #[arg(long)]
    pub append_command: Option<String>,

    /// Assign the bug to someone other than the default assignee
    #[arg(short, long)]
    pub assigned_to: Option<String>,

    /// Add a list of emails to the CC list
    #[arg(long)]
    pub cc: Option<String>,

    /// URL associated with the bug
    #[arg(short = 'U', long)]
    pub url: Option<String>,

    /// Add a list of bug dependencies
    #[arg(long = "depends-on")]
    pub dependson: Option<String>,

    /// Add a list of blocker bugs
    #[arg(long)]
    pub blocked: Option<String>,

    /// List of keywords
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Do not prompt for any values
    #[arg(long)]
    pub batch: bool,

    /// Default answer to the confirmation question
    #[arg(long, default_value = "y", value_parser = ["y", "Y", "n", "N"])]
    pub default_confirm: String,

    /// Set the priority of the new bug
    #[arg(long)]
    pub priority: Option<String>,

    /// Set the severity of the new bug
    #[arg(short = 'S', long)]
    pub severity: Option<String>,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Strings to search for in the title or body
    pub terms: Vec<String>,

    /// Display bugs in this order
    #[arg(short, long, default_value = "number")]
    pub order: String,

    /// Email the bug is assigned to
    #[arg(short, long)]
    pub assigned_to: Option<String>,

    /// Email the bug was reported by
    #[arg(short, long)]
    pub reporter: Option<String>,

    /// Restrict by CC email address
    #[arg(long)]
    pub cc: Option<String>,

    /// Email that commented on the bug
    #[arg(long)]
    pub commenter: Option<String>,

    /// Restrict by status (repeatable, use all for all statuses)
    #[arg(short, long)]
    pub status: Vec<String>,

    /// Restrict by severity (repeatable)
    #[arg(long)]
    pub severity: Vec<String>,

    /// Restrict by priority (repeatable)
    #[arg(long)]
    pub priority: Vec<String>,

    /// Search comments instead of titles
    #[arg(short, long)]
    pub comments: bool,

    /// Restrict by product (repeatable)
    #[arg(long)]
    pub product: Vec<String>,

    /// Restrict by component (repeatable)
    #[arg(short = 'C', long)]
    pub component: Vec<String>,

    /// Restrict by keywords
    #[arg(short, long)]
    pub keywords: Option<String>,

    /// Status whiteboard
    #[arg(short, long)]
    pub whiteboard: Option<String>,

    /// Show the status of bugs
    #[arg(long)]
    pub show_status: bool,

    /// Show bug ids as URLs
    #[arg(long)]
    pub show_url: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn given_attach_when_parsed_then_defaults_applied() {
        let cli = Cli::try_parse_from(["bugz", "attach", "42", "log.txt"]).unwrap();
        match cli.command {
            Commands::Attach {
                bugid,
                filename,
                content_type,
                description,
                patch,
            } => {
                assert_eq!(bugid, "42");
                assert_eq!(filename, PathBuf::from("log.txt"));
                assert_eq!(content_type, "text/plain");
                assert_eq!(description, None);
                assert!(!patch);
            }
            other => panic!("wrong sub-command: {other:?}"),
        }
    }

    #[test]
    fn given_missing_positional_when_parsed_then_usage_error() {
        assert!(Cli::try_parse_from(["bugz", "attach", "42"]).is_err());
    }

    #[test]
    fn given_repeatable_flags_when_parsed_then_accumulated_in_order() {
        let cli = Cli::try_parse_from([
            "bugz",
            "modify",
            "42",
            "--add-cc",
            "a@example.org",
            "--add-cc",
            "b@example.org",
        ])
        .unwrap();
        match cli.command {
            Commands::Modify(args) => {
                assert_eq!(args.add_cc, vec!["a@example.org", "b@example.org"]);
            }
            other => panic!("wrong sub-command: {other:?}"),
        }
    }

    #[test]
    fn given_bad_default_confirm_when_parsed_then_usage_error() {
        assert!(
            Cli::try_parse_from(["bugz", "post", "--default-confirm", "maybe"]).is_err()
        );
    }

    #[test]
    fn given_global_options_when_parsed_then_on_top_level() {
        let cli = Cli::try_parse_from([
            "bugz",
            "-b",
            "https://bugzilla.example.org/",
            "-u",
            "liz",
            "--skip-auth",
            "get",
            "7",
        ])
        .unwrap();
        assert_eq!(cli.base, "https://bugzilla.example.org/");
        assert_eq!(cli.user.as_deref(), Some("liz"));
        assert!(cli.skip_auth);
    }
}
