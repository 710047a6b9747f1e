
mod oracle;
mod parse_good;
