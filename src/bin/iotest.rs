use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

/// Block size the benchmark steps by.
const PAGE_SIZE: usize = 512;
/// Bytes read per attempt: two pages.
const READ_LEN: usize = 2 * PAGE_SIZE;
/// Timed reads of the same offset per block.
const READS_PER_BLOCK: usize = 10;

/// Time raw reads across a device and print `block,elapsed_ns` lines.
#[derive(Parser, Debug)]
#[command(name = "iotest", version, about)]
struct Args {
    /// Device or file to read
    #[arg(value_name = "DEV")]
    device: PathBuf,

    /// Stop after this many blocks; 0 reads to the end
    #[arg(value_name = "MAX_BLOCK")]
    max_block: u64,

    /// Open without O_DIRECT, going through the page cache
    #[arg(long)]
    buffered: bool,
}

/// O_DIRECT transfers need a buffer aligned to the logical block size.
#[repr(C, align(4096))]
struct AlignedBuf([u8; READ_LEN]);

fn open_device(path: &Path, direct: bool) -> Result<File> {
    let mut options = OpenOptions::new();
    options.read(true);
    if direct {
        set_direct(&mut options);
    }
    options
        .open(path)
        .with_context(|| format!("opening {}", path.display()))
}

#[cfg(target_os = "linux")]
fn set_direct(options: &mut OpenOptions) {
    use std::os::unix::fs::OpenOptionsExt;
    options.custom_flags(libc::O_DIRECT);
}

#[cfg(not(target_os = "linux"))]
fn set_direct(_options: &mut OpenOptions) {
    log::warn!("O_DIRECT is unavailable on this platform; reads may hit the page cache");
}

/// Read each block `READS_PER_BLOCK` times, seeking back after every read,
/// then move one page forward. One CSV row per block goes to `out`.
///
/// Ends after `max_block` rows (0 = no limit) or once a block read returns
/// no data; that final empty block is still reported. Returns the row count.
fn measure<D, W>(device: &mut D, max_block: u64, out: W) -> Result<u64>
where
    D: Read + Seek,
    W: Write,
{
    let mut buf = Box::new(AlignedBuf([0; READ_LEN]));
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(out);
    let mut block: u64 = 0;

    loop {
        let mut last_read = 0;
        let start = Instant::now();
        for _ in 0..READS_PER_BLOCK {
            last_read = device
                .read(&mut buf.0)
                .with_context(|| format!("reading block {block}"))?;
            device
                .seek(SeekFrom::Current(-(last_read as i64)))
                .with_context(|| format!("rewinding block {block}"))?;
        }
        let elapsed = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

        writer.serialize((block, elapsed))?;
        block += 1;

        if max_block != 0 && block >= max_block {
            break;
        }
        device
            .seek(SeekFrom::Current(PAGE_SIZE as i64))
            .with_context(|| format!("skipping past block {}", block - 1))?;
        if last_read == 0 {
            break;
        }
    }

    writer.flush()?;
    Ok(block)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut device = open_device(&args.device, !args.buffered)?;
    log::info!(
        "Timing {} (direct: {}, max block: {})",
        args.device.display(),
        !args.buffered,
        args.max_block
    );

    let stdout = std::io::stdout();
    let rows = measure(&mut device, args.max_block, stdout.lock())?;
    log::info!("Measured {rows} blocks");
    Ok(())
}
