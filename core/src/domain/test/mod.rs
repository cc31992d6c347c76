mod account;
mod message;
