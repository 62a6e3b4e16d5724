mod helpers;

mod password_test;
mod token_test;
