//! Bundled handler: renders the request a tracker client would issue
//!
//! The remote protocol client lives outside this crate; the binary binds
//! this handler so an invocation can be inspected end to end. Embedders
//! bind their own [`CommandHandler`] instead.

use crate::cli::output;
use crate::domain::handler::{CommandHandler, HandlerResult};
use crate::domain::invocation::{
    AttachParams, AttachmentParams, CommandParameters, GetParams, ModifyParams,
    NamedcmdParams, PostParams, SearchParams, SessionParameters,
};

/// Session fields never echoed back to the terminal.
const REDACTED: [&str; 2] = ["password", "httppassword"];

#[derive(Debug, Default)]
pub struct PreviewHandler;

impl PreviewHandler {
    pub fn new() -> Self {
        Self
    }

    fn render(
        &self,
        session: &SessionParameters,
        command: CommandParameters,
    ) -> HandlerResult<()> {
        output::header(command.name());
        for (key, value) in command.to_map() {
            output::detail(&format!("{key} = {value}"));
        }
        if !session.quiet {
            output::header("session");
            for (key, value) in session.to_map() {
                if REDACTED.contains(&key) {
                    output::detail(&format!("{key} = <redacted>"));
                } else {
                    output::detail(&format!("{key} = {value}"));
                }
            }
        }
        Ok(())
    }
}

impl CommandHandler for PreviewHandler {
    fn attach(
        &mut self,
        session: &SessionParameters,
        params: &AttachParams,
    ) -> HandlerResult<()> {
        self.render(session, CommandParameters::Attach(params.clone()))
    }

    fn attachment(
        &mut self,
        session: &SessionParameters,
        params: &AttachmentParams,
    ) -> HandlerResult<()> {
        self.render(session, CommandParameters::Attachment(params.clone()))
    }

    fn get(&mut self, session: &SessionParameters, params: &GetParams) -> HandlerResult<()> {
        self.render(session, CommandParameters::Get(params.clone()))
    }

    fn modify(
        &mut self,
        session: &SessionParameters,
        params: &ModifyParams,
    ) -> HandlerResult<()> {
        self.render(session, CommandParameters::Modify(params.clone()))
    }

    fn namedcmd(
        &mut self,
        session: &SessionParameters,
        params: &NamedcmdParams,
    ) -> HandlerResult<()> {
        self.render(session, CommandParameters::Namedcmd(params.clone()))
    }

    fn post(&mut self, session: &SessionParameters, params: &PostParams) -> HandlerResult<()> {
        self.render(session, CommandParameters::Post(params.clone()))
    }

    fn search(
        &mut self,
        session: &SessionParameters,
        params: &SearchParams,
    ) -> HandlerResult<()> {
        self.render(session, CommandParameters::Search(params.clone()))
    }
}
