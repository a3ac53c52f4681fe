//! Walks the buffer through a short editing session, printing each
//! stage the way the host would.

use anyhow::Result;
use quill_gap_buffer::{Element, GapBuffer, View};
use quill_host::Render;
use regex::bytes::Regex;

fn main() -> Result<()> {
    init_logging()?;

    let mut movie = GapBuffer::from(b"The life of Brian");
    println!("{}", Render(&movie));
    println!("{}", Render(&GapBuffer::from("Mr Creosote")));
    println!("{}", Render(&GapBuffer::from(&[1, 2, 3])));

    // Local edits: the gap follows the cursor.
    let len = movie.len();
    movie.set_slice(0, len, &GapBuffer::from(b"The meaning - with Life"))?;
    println!("{}", Render(&movie));

    movie.del_slice(12, 14)?;
    println!("{}", Render(&movie));

    movie.set(4, Element::Byte(b'M'))?;
    println!("{}", Render(&movie));

    movie.set_slice(12, 16, &GapBuffer::from(b"of"))?;
    println!("{}", Render(&movie));

    println!("{}", Render(&movie.retrieve(0, 3)?));
    println!("{}", movie.len());

    movie.insert(0, &GapBuffer::from(b"'"))?;
    movie.extend(&GapBuffer::from(b"'!"))?;
    println!("{}", Render(&movie));
    println!("{}", Render(&movie.retrieve(5, 7)?));

    log::debug!(
        "slots {} (gap {}, grow quantum {})",
        movie.capacity(),
        movie.gap_len(),
        movie.grow_size()
    );

    let len = movie.len();
    movie.set_slice(0, len, &GapBuffer::from(b"ab"))?;
    println!("{}", movie.capacity());
    movie.slim();
    println!("{}", movie.capacity());

    let mut positions = GapBuffer::from(&[100, 140, 220, 280]);
    positions.increment(1, 3, -7)?;
    println!("{}", Render(&positions));

    // An external matcher sees the whole sequence as one window.
    let mut movie = GapBuffer::from(b"The life of Brian");
    let pattern = Regex::new("B[a-z]+")?;

    if let View::Byte(window) = movie.view() {
        if let Some(found) = pattern.find(window) {
            println!("{}", String::from_utf8_lossy(found.as_bytes()));
        }
    }

    Ok(())
}

fn init_logging() -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let now = chrono::Local::now();

            out.finish(format_args!(
                "[{} {} {}] {}",
                now.format("%Y/%m/%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}
