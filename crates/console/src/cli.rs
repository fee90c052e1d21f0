use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use ecclesia_auth::Role;
use ecclesia_client::ClientConfig;
use ecclesia_client::config::{DEFAULT_API_URL, DEFAULT_AUTH_URL, DEFAULT_CEP_URL, DEFAULT_TIMEOUT_SECS};
use ecclesia_core::{ChurchId, MeetingId, MemberId, MinisterId, RoleId, UserId};
use ecclesia_documents::DocumentType;
use ecclesia_observability::LogFormat;

#[derive(Debug, Parser)]
#[command(name = "ecclesia")]
#[command(about = "Church administration console")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub backend: BackendArgs,

    /// Log output format (pretty or json)
    #[arg(long, global = true, env = "ECCLESIA_LOG_FORMAT", default_value = "pretty")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct BackendArgs {
    /// Base URL of the main API
    #[arg(long, global = true, env = "ECCLESIA_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Base URL of the authentication service
    #[arg(long, global = true, env = "ECCLESIA_AUTH_URL", default_value = DEFAULT_AUTH_URL)]
    pub auth_url: String,

    /// Base URL of the postal code lookup service
    #[arg(long, global = true, env = "ECCLESIA_CEP_URL", default_value = DEFAULT_CEP_URL)]
    pub cep_url: String,

    /// Session token file (defaults to the user config directory)
    #[arg(long, global = true, env = "ECCLESIA_TOKEN_FILE")]
    pub token_file: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, env = "ECCLESIA_HTTP_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl BackendArgs {
    pub fn to_config(&self) -> ClientConfig {
        ClientConfig {
            api_url: self.api_url.clone(),
            auth_url: self.auth_url.clone(),
            cep_url: self.cep_url.clone(),
            token_file: self.token_file.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and keep the session for later commands
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long, env = "ECCLESIA_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Sign out and forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Create an account through the public registration endpoint
    Register {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "ECCLESIA_PASSWORD", hide_env_values = true)]
        password: String,

        /// ADMIN or SECRETARY
        #[arg(long, default_value = "SECRETARY")]
        role: Role,
    },

    /// Headline statistics
    Dashboard,

    #[command(subcommand)]
    Members(MembersCommand),

    #[command(subcommand)]
    Churches(ChurchesCommand),

    #[command(subcommand)]
    Ministers(MinistersCommand),

    #[command(subcommand)]
    Meetings(MeetingsCommand),

    #[command(subcommand)]
    Users(UsersCommand),

    #[command(subcommand)]
    Roles(RolesCommand),

    #[command(subcommand)]
    Documents(DocumentsCommand),
}

/// Congregant records
#[derive(Debug, Subcommand)]
pub enum MembersCommand {
    List,
    Show {
        #[arg(long)]
        id: MemberId,
    },
    /// Match names containing TERM (at least 3 characters)
    Search { term: String },
    /// Create from a JSON payload
    Create {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Apply the fields in a JSON file to an existing record
    Update {
        #[arg(long)]
        id: MemberId,
        #[arg(short, long)]
        file: PathBuf,
    },
    Delete {
        #[arg(long)]
        id: MemberId,
    },
    /// Upload a PNG or JPEG photo
    UploadPhoto {
        #[arg(long)]
        id: MemberId,
        #[arg(long)]
        path: PathBuf,
    },
    /// Print the member's identity card
    Credential {
        #[arg(long)]
        id: MemberId,
    },
}

/// Churches and their registry data
#[derive(Debug, Subcommand)]
pub enum ChurchesCommand {
    List,
    Show {
        #[arg(long)]
        id: ChurchId,
    },
    Create {
        #[arg(short, long)]
        file: PathBuf,
    },
    Update {
        #[arg(long)]
        id: ChurchId,
        #[arg(short, long)]
        file: PathBuf,
    },
    Delete {
        #[arg(long)]
        id: ChurchId,
    },
    /// Suggest an address for a postal code
    LookupCep { cep: String },
}

/// Consecrated ministers
#[derive(Debug, Subcommand)]
pub enum MinistersCommand {
    List,
    Search { term: String },
    /// Register a member as a minister from a JSON payload
    Consecrate {
        #[arg(short, long)]
        file: PathBuf,
    },
    Update {
        #[arg(long)]
        id: MinisterId,
        #[arg(short, long)]
        file: PathBuf,
    },
    Delete {
        #[arg(long)]
        id: MinisterId,
    },
    Credential {
        #[arg(long)]
        id: MinisterId,
    },
}

/// Ministerial meetings
#[derive(Debug, Subcommand)]
pub enum MeetingsCommand {
    List,
    Create {
        #[arg(short, long)]
        file: PathBuf,
    },
    Update {
        #[arg(long)]
        id: MeetingId,
        #[arg(short, long)]
        file: PathBuf,
    },
    Delete {
        #[arg(long)]
        id: MeetingId,
    },
    /// Save the meeting report PDF
    Download {
        #[arg(long)]
        id: MeetingId,
        /// Target directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
}

/// Console accounts (admin only)
#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    List,
    Create {
        #[arg(short, long)]
        file: PathBuf,
    },
    Update {
        #[arg(long)]
        id: UserId,
        #[arg(short, long)]
        file: PathBuf,
    },
    Delete {
        #[arg(long)]
        id: UserId,
    },
    Activate {
        #[arg(long)]
        id: UserId,
    },
    Deactivate {
        #[arg(long)]
        id: UserId,
    },
    ResetPassword {
        #[arg(long)]
        id: UserId,
        #[arg(short, long, env = "ECCLESIA_NEW_PASSWORD", hide_env_values = true)]
        password: String,
    },
}

/// Roles and their permissions (admin only)
#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    List,
    /// Grant and revoke permissions on a role
    Edit {
        #[arg(long)]
        id: RoleId,
        #[arg(long, value_delimiter = ',')]
        grant: Vec<String>,
        #[arg(long, value_delimiter = ',')]
        revoke: Vec<String>,
    },
}

/// Letters, certificates and office documents
#[derive(Debug, Subcommand)]
pub enum DocumentsCommand {
    /// List the document types
    Types,
    /// Generate a PDF
    Generate {
        /// Document type, e.g. recommendation-letter-member
        #[arg(long = "type")]
        document_type: DocumentType,
        #[arg(long)]
        member: Option<MemberId>,
        #[arg(long)]
        minister: Option<MinisterId>,
        #[arg(long)]
        purpose: Option<String>,
        #[arg(long)]
        recipient: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        /// Office body text, usually an edited template
        #[arg(long)]
        body_file: Option<PathBuf>,
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },
    /// Print the server template of an office document
    Template {
        #[arg(long = "type")]
        document_type: DocumentType,
    },
}
