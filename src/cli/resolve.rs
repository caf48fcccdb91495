//! Turns parsed arguments into a validated [`Invocation`]
//!
//! Closed-choice flags are checked against the configured vocabularies
//! here, before any parameters reach a handler. The same step performs the
//! session/command partition and the few destination rewrites the grammar
//! calls for (`--no-attachments` lands as `attachments: false`, the three
//! comment flags collapse into one content source).

use crate::cli::args::{Cli, Commands, ModifyArgs, PostArgs, SearchArgs};
use crate::domain::choices::ChoiceTable;
use crate::domain::content::{ContentSource, Description};
use crate::domain::error::DomainResult;
use crate::domain::invocation::{
    AttachParams, AttachmentParams, CommandParameters, GetParams, Invocation,
    ModifyParams, NamedcmdParams, PostParams, SearchParams, SessionParameters,
};

/// Validate and partition one parsed command line.
pub fn resolve(cli: Cli, choices: &ChoiceTable) -> DomainResult<Invocation> {
    let session = SessionParameters {
        base: cli.base,
        user: cli.user,
        password: cli.password,
        httpuser: cli.httpuser,
        httppassword: cli.httppassword,
        forget: cli.forget,
        quiet: cli.quiet,
        columns: cli.columns,
        encoding: cli.encoding,
        skip_auth: cli.skip_auth,
    };

    let command = match cli.command {
        Commands::Attach {
            bugid,
            filename,
            content_type,
            description,
            patch,
        } => CommandParameters::Attach(AttachParams {
            bugid,
            filename,
            content_type,
            description,
            patch,
        }),
        Commands::Attachment { attachid, view } => {
            CommandParameters::Attachment(AttachmentParams { attachid, view })
        }
        Commands::Get {
            bugid,
            no_attachments,
            no_comments,
        } => CommandParameters::Get(GetParams {
            bugid,
            attachments: !no_attachments,
            comments: !no_comments,
        }),
        Commands::Modify(args) => CommandParameters::Modify(resolve_modify(args, choices)?),
        Commands::Namedcmd {
            command,
            show_status,
            show_url,
        } => CommandParameters::Namedcmd(NamedcmdParams {
            command,
            show_status,
            show_url,
        }),
        Commands::Post(args) => CommandParameters::Post(resolve_post(args, choices)?),
        Commands::Search(args) => CommandParameters::Search(resolve_search(args, choices)?),
    };

    Ok(Invocation { session, command })
}

fn resolve_modify(args: ModifyArgs, choices: &ChoiceTable) -> DomainResult<ModifyParams> {
    if let Some(value) = &args.priority {
        choices.ensure_priority(value)?;
    }
    if let Some(value) = &args.resolution {
        choices.ensure_resolution(value)?;
    }
    if let Some(value) = &args.status {
        choices.ensure_status(value)?;
    }
    if let Some(value) = &args.severity {
        choices.ensure_severity(value)?;
    }

    let comment = ContentSource::from_flags(args.comment, args.comment_from, args.comment_editor);

    Ok(ModifyParams {
        bugid: args.bugid,
        assigned_to: args.assigned_to,
        comment,
        duplicate: args.duplicate,
        keywords: args.keywords,
        priority: args.priority,
        resolution: args.resolution,
        status: args.status,
        severity: args.severity,
        title: args.title,
        url: args.url,
        whiteboard: args.whiteboard,
        add_cc: args.add_cc,
        remove_cc: args.remove_cc,
        add_dependson: args.add_dependson,
        remove_dependson: args.remove_dependson,
        add_blocked: args.add_blocked,
        remove_blocked: args.remove_blocked,
        component: args.component,
        fixed: args.fixed,
        invalid: args.invalid,
    })
}

fn resolve_post(args: PostArgs, choices: &ChoiceTable) -> DomainResult<PostParams> {
    if let Some(value) = &args.priority {
        choices.ensure_priority(value)?;
    }
    if let Some(value) = &args.severity {
        choices.ensure_severity(value)?;
    }

    Ok(PostParams {
        product: args.product,
        component: args.component,
        prodversion: args.prodversion,
        title: args.title,
        description: Description {
            inline: args.description,
            from_file: args.description_from,
            append_command: args.append_command,
        },
        assigned_to: args.assigned_to,
        cc: args.cc,
        url: args.url,
        dependson: args.dependson,
        blocked: args.blocked,
        keywords: args.keywords,
        batch: args.batch,
        default_confirm: args.default_confirm,
        priority: args.priority,
        severity: args.severity,
    })
}

fn resolve_search(args: SearchArgs, choices: &ChoiceTable) -> DomainResult<SearchParams> {
    choices.ensure_order(&args.order)?;
    for value in &args.severity {
        choices.ensure_severity(value)?;
    }
    for value in &args.priority {
        choices.ensure_priority(value)?;
    }

    Ok(SearchParams {
        terms: args.terms,
        order: args.order,
        assigned_to: args.assigned_to,
        reporter: args.reporter,
        cc: args.cc,
        commenter: args.commenter,
        status: args.status,
        severity: args.severity,
        priority: args.priority,
        comments: args.comments,
        product: args.product,
        component: args.component,
        keywords: args.keywords,
        whiteboard: args.whiteboard,
        show_status: args.show_status,
        show_url: args.show_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn resolve_line(argv: &[&str]) -> DomainResult<Invocation> {
        let cli = Cli::try_parse_from(argv).unwrap();
        resolve(cli, &ChoiceTable::default())
    }

    #[test]
    fn given_get_when_resolved_then_no_flags_invert() {
        let invocation = resolve_line(&["bugz", "get", "42", "--no-attachments"]).unwrap();
        match invocation.command {
            CommandParameters::Get(params) => {
                assert!(!params.attachments);
                assert!(params.comments);
            }
            other => panic!("wrong command: {other:?}"),
        }
    }

    #[test]
    fn given_bad_severity_when_resolved_then_rejected() {
        let err = resolve_line(&["bugz", "modify", "42", "--severity", "bogus"]).unwrap_err();
        assert!(err.to_string().contains("--severity"));
    }

    #[test]
    fn given_editor_and_file_when_resolved_then_editor_prefilled() {
        let invocation = resolve_line(&[
            "bugz",
            "modify",
            "42",
            "-C",
            "--comment-from",
            "draft.txt",
        ])
        .unwrap();
        match invocation.command {
            CommandParameters::Modify(params) => assert_eq!(
                params.comment,
                Some(ContentSource::Editor {
                    prefill: Some("draft.txt".into())
                })
            ),
            other => panic!("wrong command: {other:?}"),
        }
    }

    #[test]
    fn given_bad_search_order_when_resolved_then_rejected() {
        let err = resolve_line(&["bugz", "search", "-o", "size"]).unwrap_err();
        assert!(err.to_string().contains("--order"));
    }
}
