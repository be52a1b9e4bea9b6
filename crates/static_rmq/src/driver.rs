use std::io::{BufRead, BufWriter, Write};
use std::ops::Range;
use std::time::Instant;

use rmq::{NaiveRmq, SqrtDecompositionRmq, StaticRmq};

use crate::Error;
use crate::config::{Config, Engine};
use crate::input::Problem;
use crate::query::Query;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    pub len: usize,
    pub queries: usize,
    /// Block size used by the sqrt engine, `None` for other engines.
    pub block_size: Option<usize>,
}

/// Reads a problem from `reader` and writes one minimum per line to `writer`.
///
/// Every query is validated before the first answer is written.
pub fn run<R: BufRead, W: Write>(reader: R, writer: W, config: &Config) -> Result<Summary, Error> {
    let started = Instant::now();
    let Problem { values, queries } = Problem::parse(reader)?;
    log::debug!("parsed input in {:?}", started.elapsed());

    let len = values.len();
    let ranges = queries
        .iter()
        .enumerate()
        .map(|(i, query)| query.resolve(i + 1, len, config.bounds))
        .collect::<Result<Vec<_>, _>>()?;

    let block_size = match config.engine {
        Engine::Sqrt => {
            let started = Instant::now();
            let rmq = match config.block_size {
                Some(m) => SqrtDecompositionRmq::with_block_size(&values, m),
                None => SqrtDecompositionRmq::new(&values),
            };
            log::info!(
                "n={len} q={} block_size={} blocks={}",
                queries.len(),
                rmq.block_size(),
                rmq.num_blocks()
            );
            log::debug!("built block table in {:?}", started.elapsed());
            answer(&rmq, &queries, &ranges, writer)?;
            Some(rmq.block_size())
        }
        Engine::Naive => {
            log::info!("n={len} q={} engine=naive", queries.len());
            answer(&NaiveRmq::new(&values), &queries, &ranges, writer)?;
            None
        }
    };

    Ok(Summary {
        len,
        queries: queries.len(),
        block_size,
    })
}

fn answer<R: StaticRmq, W: Write>(
    rmq: &R,
    queries: &[Query],
    ranges: &[Range<usize>],
    writer: W,
) -> Result<(), Error> {
    let started = Instant::now();
    let mut out = BufWriter::new(writer);
    for (i, (query, range)) in queries.iter().zip(ranges).enumerate() {
        let min = rmq
            .min(range.clone())
            .ok_or_else(|| Error::QueryOutOfRange {
                query: i + 1,
                lo: query.lo,
                hi: query.hi,
                len: rmq.len(),
            })?;
        writeln!(out, "{min}")?;
    }
    out.flush()?;
    log::debug!("answered {} queries in {:?}", ranges.len(), started.elapsed());
    Ok(())
}
