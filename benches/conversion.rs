//! Conversion pipeline benchmark
//!
//! Generates synthetic vessel profiles of increasing size and measures the
//! full STAF to OpenVesselSpec conversion over them.

use std::fmt::Write;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use staf_converter::{ConversionConfig, convert};

/// Build a synthetic STAF file with `bays` odd-numbered bays, each with an
/// above and a below deck section, eight rows and a handful of slots.
fn synthetic_staf(bays: usize) -> String {
    let mut content = String::new();

    content.push_str("*SHIP\n");
    content.push_str(
        "**CLASS\tNAME\tLCG IN USE\tLCG REF PT\tLCG + DIR\tVCG IN USE\tTCG IN USE\tTCG + DIR\n",
    );
    content.push_str("PANAMAX\tBENCHSHIP\tY\tMS\tF\tT\tY\tS\n");

    content.push_str("*SECTION\n");
    content.push_str("**STAF BAY\tLEVEL\tLCG 20\tLCG 40\n");
    for bay in 0..bays {
        let number = bay * 2 + 1;
        let lcg = bay as f64 * 6.5 - 140.0;
        for level in ["A", "B"] {
            writeln!(content, "{number:02}\t{level}\t{lcg:.2}\t{:.2}", lcg + 0.2).unwrap();
        }
    }

    content.push_str("*STACK\n");
    content.push_str("**STAF BAY\tLEVEL\tISO STACK\tTOP TIER\tBOTTOM TIER\tTCG\tMAX HT\n");
    for bay in 0..bays {
        let number = bay * 2 + 1;
        for row in (0..16).step_by(2) {
            let tcg = row as f64 * 1.25;
            writeln!(content, "{number:02}\tA\t{row:02}\t90\t80\t{tcg:.2}\t12.90").unwrap();
            writeln!(content, "{number:02}\tB\t{row:02}\t08\t02\t{tcg:.2}\t-").unwrap();
        }
    }

    content.push_str("*TIER\n");
    content.push_str("**STAF BAY\tLEVEL\tISO TIER\tVCG\n");
    for bay in 0..bays {
        let number = bay * 2 + 1;
        writeln!(content, "{number:02}\tA\t80\t20.00").unwrap();
        writeln!(content, "{number:02}\tB\t02\t2.50").unwrap();
    }

    content.push_str("*SLOT\n");
    content.push_str("**STAF BAY\tLEVEL\tISO STACK\tTIERS\tACC 20\tACC 40\tREEFER\n");
    for bay in 0..bays {
        let number = bay * 2 + 1;
        for row in (0..16).step_by(2) {
            writeln!(content, "{number:02}\tA\t{row:02}\t1 2 3 4 5\tY\tY\t-").unwrap();
            writeln!(content, "{number:02}\tB\t{row:02}\t02 04 06\tY\t-\tY").unwrap();
        }
    }

    content
}

fn bench_convert(c: &mut Criterion) {
    let config = ConversionConfig::new(294_500);
    let small = synthetic_staf(8);
    let large = synthetic_staf(40);

    c.bench_function("convert 8 bays", |b| {
        b.iter(|| convert(black_box(&small), &config).unwrap())
    });

    c.bench_function("convert 40 bays", |b| {
        b.iter(|| convert(black_box(&large), &config).unwrap())
    });

    c.bench_function("serialize 40 bays", |b| {
        let document = convert(&large, &config).unwrap();
        b.iter(|| document.to_json_string(black_box(true)).unwrap())
    });
}

criterion_group!(benches, bench_convert);
criterion_main!(benches);
