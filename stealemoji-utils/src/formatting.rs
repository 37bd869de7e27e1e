/// Page length used when splitting long listings across messages.
pub const PAGE_LENGTH: usize = 2000;

/// A yes/no answer typed by a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YesNo {
    Yes,
    No,
}

/// Parse `yes`, `y`, `no` or `n` in any case, ignoring surrounding whitespace.
pub fn parse_yes_no(raw: &str) -> Option<YesNo> {
    let value = raw.trim();
    if value.eq_ignore_ascii_case("yes") || value.eq_ignore_ascii_case("y") {
        Some(YesNo::Yes)
    } else if value.eq_ignore_ascii_case("no") || value.eq_ignore_ascii_case("n") {
        Some(YesNo::No)
    } else {
        None
    }
}

pub fn enabled_label(enabled: bool) -> &'static str {
    if enabled { "enabled" } else { "disabled" }
}

/// Split `text` into pages of at most `page_length` bytes, breaking on `delim`
/// where possible. Tokens longer than a page are cut at char boundaries; a
/// single char wider than `page_length` gets a page of its own.
pub fn pagify(text: &str, delim: char, page_length: usize) -> Vec<String> {
    let page_length = page_length.max(1);
    let mut pages = Vec::new();
    let mut current = String::new();

    for token in text.split(delim).filter(|token| !token.is_empty()) {
        let needed = if current.is_empty() {
            token.len()
        } else {
            current.len() + delim.len_utf8() + token.len()
        };

        if needed <= page_length {
            if !current.is_empty() {
                current.push(delim);
            }
            current.push_str(token);
            continue;
        }

        if !current.is_empty() {
            pages.push(std::mem::take(&mut current));
        }

        let mut rest = token;
        while rest.len() > page_length {
            let mut cut = page_length;
            while !rest.is_char_boundary(cut) {
                cut -= 1;
            }
            if cut == 0 {
                cut = rest.chars().next().map_or(1, char::len_utf8);
            }
            pages.push(rest[..cut].to_owned());
            rest = &rest[cut..];
        }
        current.push_str(rest);
    }

    if !current.is_empty() {
        pages.push(current);
    }

    pages
}
