use std::io::{self, BufRead, Write};

/// Asks `question` and reads one line. Returns `None` at end of input.
pub(super) fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Asks until a non-blank answer is given. Returns `None` at end of input.
pub(super) fn ask_non_empty<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    complaint: &str,
) -> io::Result<Option<String>> {
    loop {
        match ask(input, output, question)? {
            None => return Ok(None),
            Some(answer) if answer.trim().is_empty() => writeln!(output, "{}", complaint)?,
            Some(answer) => return Ok(Some(answer)),
        }
    }
}

/// Yes/no question defaulting to no.
pub(super) fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> io::Result<bool> {
    let answer = ask(input, output, &format!("{} [y/N]: ", question))?;
    Ok(matches!(
        answer.as_deref().map(|a| a.trim().to_lowercase()).as_deref(),
        Some("y") | Some("yes")
    ))
}
