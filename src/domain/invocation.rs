//! Resolved invocations: session vs command parameters
//!
//! A parsed command line splits into two disjoint halves: the session
//! parameters every operation needs (credentials, tracker URL, output
//! shaping) and the parameters of the one operation being invoked. The
//! split is declared statically here, one typed struct per sub-command,
//! with the enum variant doubling as the handler identity.
//!
//! Handlers that speak a keyword-argument wire protocol get the same data
//! as flat maps through [`SessionParameters::to_map`] and
//! [`CommandParameters::to_map`]; the two key sets are disjoint and
//! together cover everything the command line resolved to.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::domain::content::{ContentSource, Description};

/// Default tracker URL when `--base` is not given.
pub const DEFAULT_BASE: &str = "https://bugs.gentoo.org/";

/// A parameter value as handed across the handler boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "{s}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

/// Flat name-to-value view of one parameter half.
pub type ParamMap = BTreeMap<&'static str, ParamValue>;

/// Parameters that apply to every sub-command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParameters {
    pub base: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub httpuser: Option<String>,
    pub httppassword: Option<String>,
    pub forget: bool,
    pub quiet: bool,
    pub columns: u32,
    pub encoding: Option<String>,
    pub skip_auth: bool,
}

impl Default for SessionParameters {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            user: None,
            password: None,
            httpuser: None,
            httppassword: None,
            forget: false,
            quiet: false,
            columns: 0,
            encoding: None,
            skip_auth: false,
        }
    }
}

impl SessionParameters {
    pub fn to_map(&self) -> ParamMap {
        let mut map = ParamMap::new();
        map.insert("base", ParamValue::Str(self.base.clone()));
        put_opt_str(&mut map, "user", &self.user);
        put_opt_str(&mut map, "password", &self.password);
        put_opt_str(&mut map, "httpuser", &self.httpuser);
        put_opt_str(&mut map, "httppassword", &self.httppassword);
        map.insert("forget", ParamValue::Bool(self.forget));
        map.insert("quiet", ParamValue::Bool(self.quiet));
        map.insert("columns", ParamValue::Int(self.columns.into()));
        put_opt_str(&mut map, "encoding", &self.encoding);
        map.insert("skip_auth", ParamValue::Bool(self.skip_auth));
        map
    }
}

/// `attach <bugid> <filename>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachParams {
    pub bugid: String,
    pub filename: PathBuf,
    pub content_type: String,
    pub description: Option<String>,
    pub patch: bool,
}

/// `attachment <attachid>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentParams {
    pub attachid: String,
    pub view: bool,
}

/// `get <bugid>`; the `no-*` flags arrive already inverted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetParams {
    pub bugid: String,
    pub attachments: bool,
    pub comments: bool,
}

/// `modify <bugid>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifyParams {
    pub bugid: String,
    pub assigned_to: Option<String>,
    pub comment: Option<ContentSource>,
    pub duplicate: i64,
    pub keywords: Option<String>,
    pub priority: Option<String>,
    pub resolution: Option<String>,
    pub status: Option<String>,
    pub severity: Option<String>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub whiteboard: Option<String>,
    pub add_cc: Vec<String>,
    pub remove_cc: Vec<String>,
    pub add_dependson: Vec<String>,
    pub remove_dependson: Vec<String>,
    pub add_blocked: Vec<String>,
    pub remove_blocked: Vec<String>,
    pub component: Option<String>,
    pub fixed: bool,
    pub invalid: bool,
}

/// `namedcmd <command>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedcmdParams {
    pub command: String,
    pub show_status: bool,
    pub show_url: bool,
}

/// `post`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostParams {
    pub product: Option<String>,
    pub component: Option<String>,
    pub prodversion: Option<String>,
    pub title: Option<String>,
    pub description: Description,
    pub assigned_to: Option<String>,
    pub cc: Option<String>,
    pub url: Option<String>,
    pub dependson: Option<String>,
    pub blocked: Option<String>,
    pub keywords: Option<String>,
    pub batch: bool,
    pub default_confirm: String,
    pub priority: Option<String>,
    pub severity: Option<String>,
}

/// `search [terms...]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub terms: Vec<String>,
    pub order: String,
    pub assigned_to: Option<String>,
    pub reporter: Option<String>,
    pub cc: Option<String>,
    pub commenter: Option<String>,
    pub status: Vec<String>,
    pub severity: Vec<String>,
    pub priority: Vec<String>,
    pub comments: bool,
    pub product: Vec<String>,
    pub component: Vec<String>,
    pub keywords: Option<String>,
    pub whiteboard: Option<String>,
    pub show_status: bool,
    pub show_url: bool,
}

/// The command half of an invocation; the variant is the handler identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParameters {
    Attach(AttachParams),
    Attachment(AttachmentParams),
    Get(GetParams),
    Modify(ModifyParams),
    Namedcmd(NamedcmdParams),
    Post(PostParams),
    Search(SearchParams),
}

impl CommandParameters {
    /// Sub-command name as spelled on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Attach(_) => "attach",
            Self::Attachment(_) => "attachment",
            Self::Get(_) => "get",
            Self::Modify(_) => "modify",
            Self::Namedcmd(_) => "namedcmd",
            Self::Post(_) => "post",
            Self::Search(_) => "search",
        }
    }

    /// Flat map view. Absent optionals and empty lists are omitted;
    /// booleans and defaulted scalars are always present.
    pub fn to_map(&self) -> ParamMap {
        let mut map = ParamMap::new();
        match self {
            Self::Attach(p) => {
                map.insert("bugid", ParamValue::Str(p.bugid.clone()));
                map.insert(
                    "filename",
                    ParamValue::Str(p.filename.display().to_string()),
                );
                map.insert("content_type", ParamValue::Str(p.content_type.clone()));
                put_opt_str(&mut map, "description", &p.description);
                map.insert("patch", ParamValue::Bool(p.patch));
            }
            Self::Attachment(p) => {
                map.insert("attachid", ParamValue::Str(p.attachid.clone()));
                map.insert("view", ParamValue::Bool(p.view));
            }
            Self::Get(p) => {
                map.insert("bugid", ParamValue::Str(p.bugid.clone()));
                map.insert("attachments", ParamValue::Bool(p.attachments));
                map.insert("comments", ParamValue::Bool(p.comments));
            }
            Self::Modify(p) => {
                map.insert("bugid", ParamValue::Str(p.bugid.clone()));
                put_opt_str(&mut map, "assigned_to", &p.assigned_to);
                match &p.comment {
                    Some(ContentSource::Inline(text)) => {
                        map.insert("comment", ParamValue::Str(text.clone()));
                    }
                    Some(ContentSource::FromFile(path)) => {
                        map.insert(
                            "comment_from",
                            ParamValue::Str(path.display().to_string()),
                        );
                    }
                    Some(ContentSource::Editor { prefill }) => {
                        map.insert("comment_editor", ParamValue::Bool(true));
                        if let Some(path) = prefill {
                            map.insert(
                                "comment_from",
                                ParamValue::Str(path.display().to_string()),
                            );
                        }
                    }
                    None => {}
                }
                map.insert("duplicate", ParamValue::Int(p.duplicate));
                put_opt_str(&mut map, "keywords", &p.keywords);
                put_opt_str(&mut map, "priority", &p.priority);
                put_opt_str(&mut map, "resolution", &p.resolution);
                put_opt_str(&mut map, "status", &p.status);
                put_opt_str(&mut map, "severity", &p.severity);
                put_opt_str(&mut map, "title", &p.title);
                put_opt_str(&mut map, "url", &p.url);
                put_opt_str(&mut map, "whiteboard", &p.whiteboard);
                put_list(&mut map, "add_cc", &p.add_cc);
                put_list(&mut map, "remove_cc", &p.remove_cc);
                put_list(&mut map, "add_dependson", &p.add_dependson);
                put_list(&mut map, "remove_dependson", &p.remove_dependson);
                put_list(&mut map, "add_blocked", &p.add_blocked);
                put_list(&mut map, "remove_blocked", &p.remove_blocked);
                put_opt_str(&mut map, "component", &p.component);
                map.insert("fixed", ParamValue::Bool(p.fixed));
                map.insert("invalid", ParamValue::Bool(p.invalid));
            }
            Self::Namedcmd(p) => {
                map.insert("command", ParamValue::Str(p.command.clone()));
                map.insert("show_status", ParamValue::Bool(p.show_status));
                map.insert("show_url", ParamValue::Bool(p.show_url));
            }
            Self::Post(p) => {
                put_opt_str(&mut map, "product", &p.product);
                put_opt_str(&mut map, "component", &p.component);
                put_opt_str(&mut map, "prodversion", &p.prodversion);
                put_opt_str(&mut map, "title", &p.title);
                put_opt_str(&mut map, "description", &p.description.inline);
                if let Some(path) = &p.description.from_file {
                    map.insert(
                        "description_from",
                        ParamValue::Str(path.display().to_string()),
                    );
                }
                put_opt_str(&mut map, "append_command", &p.description.append_command);
                put_opt_str(&mut map, "assigned_to", &p.assigned_to);
                put_opt_str(&mut map, "cc", &p.cc);
                put_opt_str(&mut map, "url", &p.url);
                put_opt_str(&mut map, "dependson", &p.dependson);
                put_opt_str(&mut map, "blocked", &p.blocked);
                put_opt_str(&mut map, "keywords", &p.keywords);
                map.insert("batch", ParamValue::Bool(p.batch));
                map.insert(
                    "default_confirm",
                    ParamValue::Str(p.default_confirm.clone()),
                );
                put_opt_str(&mut map, "priority", &p.priority);
                put_opt_str(&mut map, "severity", &p.severity);
            }
            Self::Search(p) => {
                put_list(&mut map, "terms", &p.terms);
                map.insert("order", ParamValue::Str(p.order.clone()));
                put_opt_str(&mut map, "assigned_to", &p.assigned_to);
                put_opt_str(&mut map, "reporter", &p.reporter);
                put_opt_str(&mut map, "cc", &p.cc);
                put_opt_str(&mut map, "commenter", &p.commenter);
                put_list(&mut map, "status", &p.status);
                put_list(&mut map, "severity", &p.severity);
                put_list(&mut map, "priority", &p.priority);
                map.insert("comments", ParamValue::Bool(p.comments));
                put_list(&mut map, "product", &p.product);
                put_list(&mut map, "component", &p.component);
                put_opt_str(&mut map, "keywords", &p.keywords);
                put_opt_str(&mut map, "whiteboard", &p.whiteboard);
                map.insert("show_status", ParamValue::Bool(p.show_status));
                map.insert("show_url", ParamValue::Bool(p.show_url));
            }
        }
        map
    }
}

/// One fully resolved, validated invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub session: SessionParameters,
    pub command: CommandParameters,
}

fn put_opt_str(map: &mut ParamMap, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        map.insert(key, ParamValue::Str(v.clone()));
    }
}

fn put_list(map: &mut ParamMap, key: &'static str, values: &[String]) {
    if !values.is_empty() {
        map.insert(key, ParamValue::List(values.to_vec()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_map_contains_only_defaulted_globals() {
        let map = SessionParameters::default().to_map();
        assert_eq!(map.get("base"), Some(&ParamValue::Str(DEFAULT_BASE.into())));
        assert_eq!(map.get("forget"), Some(&ParamValue::Bool(false)));
        assert_eq!(map.get("quiet"), Some(&ParamValue::Bool(false)));
        assert_eq!(map.get("columns"), Some(&ParamValue::Int(0)));
        assert_eq!(map.get("skip_auth"), Some(&ParamValue::Bool(false)));
        assert!(!map.contains_key("user"));
        assert!(!map.contains_key("encoding"));
    }

    #[test]
    fn editor_comment_with_prefill_maps_to_both_flags() {
        let params = CommandParameters::Modify(ModifyParams {
            bugid: "123".into(),
            assigned_to: None,
            comment: Some(ContentSource::Editor {
                prefill: Some("draft.txt".into()),
            }),
            duplicate: 0,
            keywords: None,
            priority: None,
            resolution: None,
            status: None,
            severity: None,
            title: None,
            url: None,
            whiteboard: None,
            add_cc: vec![],
            remove_cc: vec![],
            add_dependson: vec![],
            remove_dependson: vec![],
            add_blocked: vec![],
            remove_blocked: vec![],
            component: None,
            fixed: false,
            invalid: false,
        });
        let map = params.to_map();
        assert_eq!(map.get("comment_editor"), Some(&ParamValue::Bool(true)));
        assert_eq!(
            map.get("comment_from"),
            Some(&ParamValue::Str("draft.txt".into()))
        );
        assert!(!map.contains_key("comment"));
    }

    #[test]
    fn command_names_cover_all_seven_subcommands() {
        let get = CommandParameters::Get(GetParams {
            bugid: "1".into(),
            attachments: true,
            comments: true,
        });
        assert_eq!(get.name(), "get");
        let named = CommandParameters::Namedcmd(NamedcmdParams {
            command: "mine".into(),
            show_status: false,
            show_url: false,
        });
        assert_eq!(named.name(), "namedcmd");
    }
}
