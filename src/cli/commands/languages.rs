use crate::config::Session;
use crate::translation::print_languages;

pub fn run_languages(session: &Session) {
    print_languages(session.languages());
}
