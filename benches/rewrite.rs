use criterion::{Criterion, criterion_group, criterion_main};
use fastq_header_fix::{FastqReader, FastqWriter, FixOptions};
use std::io::Cursor;

fn bench_rewrite(c: &mut Criterion) {
    let mut data = String::new();
    for i in 0..2000 {
        data.push_str(&format!(
            "@A00123:8:H5:1:1101:{i} 2000:N:0:ACGT\nACGTACGTACGTACGT\n+\n################\n"
        ));
    }
    c.bench_function("rewrite_2000_records", |b| {
        b.iter(|| {
            let rdr = Cursor::new(data.clone().into_bytes());
            let fq = FastqReader::from_bufread(rdr, FixOptions::default());
            let mut out = FastqWriter::new(Vec::with_capacity(data.len()));
            for rec in fq {
                let mut r = rec.unwrap();
                r.fix_header();
                out.write_record(&r).unwrap();
            }
            out.records()
        })
    });
}

criterion_group!(benches, bench_rewrite);
criterion_main!(benches);
