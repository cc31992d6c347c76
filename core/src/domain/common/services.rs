use crate::domain::{account::ports::AccountRepository, message::ports::MessageRepository};

#[derive(Clone)]
pub struct Service<A, M>
where
    A: AccountRepository,
    M: MessageRepository,
{
    pub(crate) account_repository: A,
    pub(crate) message_repository: M,
}

impl<A, M> Service<A, M>
where
    A: AccountRepository,
    M: MessageRepository,
{
    pub fn new(account_repository: A, message_repository: M) -> Self {
        Self {
            account_repository,
            message_repository,
        }
    }
}
