//! Handler boundary
//!
//! Everything past this trait is outside the command core: authentication,
//! the remote protocol exchange, and response rendering. The core hands a
//! handler the session parameters and the one command's parameters, nothing
//! else, and passes the handler's verdict through unmodified.

use thiserror::Error;

use crate::domain::invocation::{
    AttachParams, AttachmentParams, CommandParameters, GetParams, Invocation,
    ModifyParams, NamedcmdParams, PostParams, SearchParams, SessionParameters,
};

/// Failure reported by a handler. The exit code travels with the error so
/// the process can terminate with whatever the handler decided.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct HandlerError {
    pub message: String,
    pub exit_code: i32,
}

impl HandlerError {
    pub fn new(message: impl Into<String>, exit_code: i32) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }
}

pub type HandlerResult<T> = Result<T, HandlerError>;

/// One method per sub-command; the method invoked is the handler identity
/// bound by the grammar.
pub trait CommandHandler {
    fn attach(
        &mut self,
        session: &SessionParameters,
        params: &AttachParams,
    ) -> HandlerResult<()>;

    fn attachment(
        &mut self,
        session: &SessionParameters,
        params: &AttachmentParams,
    ) -> HandlerResult<()>;

    fn get(&mut self, session: &SessionParameters, params: &GetParams) -> HandlerResult<()>;

    fn modify(
        &mut self,
        session: &SessionParameters,
        params: &ModifyParams,
    ) -> HandlerResult<()>;

    fn namedcmd(
        &mut self,
        session: &SessionParameters,
        params: &NamedcmdParams,
    ) -> HandlerResult<()>;

    fn post(&mut self, session: &SessionParameters, params: &PostParams) -> HandlerResult<()>;

    fn search(
        &mut self,
        session: &SessionParameters,
        params: &SearchParams,
    ) -> HandlerResult<()>;
}

/// Route a resolved invocation to the handler method its sub-command is
/// bound to.
pub fn dispatch(
    invocation: &Invocation,
    handler: &mut dyn CommandHandler,
) -> HandlerResult<()> {
    let session = &invocation.session;
    match &invocation.command {
        CommandParameters::Attach(params) => handler.attach(session, params),
        CommandParameters::Attachment(params) => handler.attachment(session, params),
        CommandParameters::Get(params) => handler.get(session, params),
        CommandParameters::Modify(params) => handler.modify(session, params),
        CommandParameters::Namedcmd(params) => handler.namedcmd(session, params),
        CommandParameters::Post(params) => handler.post(session, params),
        CommandParameters::Search(params) => handler.search(session, params),
    }
}
