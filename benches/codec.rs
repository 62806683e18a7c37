use criterion::{black_box, criterion_group, criterion_main, Criterion};
use letter_huffman::{FrequencyTable, HuffmanCodec, HuffmanTree};

const TEXT: &str = "I have a dream that one day this nation will rise up and live out the true \
meaning of its creed we hold these truths to be self evident that all men are created equal";

pub fn codec_benchmark(c: &mut Criterion) {
    let table = FrequencyTable::from_text(TEXT);
    c.bench_function("huffman build tree", |b| {
        b.iter(|| HuffmanTree::build(black_box(&table)).unwrap())
    });

    let codec = HuffmanCodec::from_text(TEXT).unwrap();
    c.bench_function("huffman encode", |b| b.iter(|| codec.encode(black_box(TEXT))));

    let encoded = codec.encode(TEXT);
    c.bench_function("huffman decode", |b| {
        b.iter(|| codec.decode(black_box(encoded.bits())).unwrap())
    });
}

criterion_group!(benches, codec_benchmark);
criterion_main!(benches);
