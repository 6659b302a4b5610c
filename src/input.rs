use std::io::{BufRead, Write};

use crate::error::InputError;
use crate::models::ScrapeRequest;
use crate::prompt::PromptTemplate;

pub const URL_PROMPT: &str = "URL: ";
pub const INSTRUCTION_PROMPT: &str = "Prompt (optional): ";
pub const PROXY_PROMPT: &str = "Use proxy? (yes, press Enter to skip): ";

/// Asks for the target URL, an optional instruction and the proxy flag.
///
/// No retries: the first empty URL or read failure ends collection.
pub fn collect_request<R, W>(reader: &mut R, writer: &mut W) -> Result<ScrapeRequest, InputError>
where
    R: BufRead,
    W: Write,
{
    let url = ask(reader, writer, URL_PROMPT)?;
    if url.is_empty() {
        return Err(InputError::EmptyUrl);
    }

    let instruction = ask(reader, writer, INSTRUCTION_PROMPT)?;
    let instruction = PromptTemplate::from_user_input(&instruction)?;

    let use_proxy = parse_proxy_answer(&ask(reader, writer, PROXY_PROMPT)?);

    Ok(ScrapeRequest {
        url,
        instruction,
        use_proxy,
    })
}

pub fn parse_proxy_answer(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

fn ask<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> Result<String, InputError>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
