use std::hint::black_box;

use arinc424::records::{Airport, ControlledAirspace, Procedure, RecordKind, Records, Runway};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

const AIRPORT: &[u8] = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
const RUNWAY: &[u8] = b"SUSAP KJFKK6GRW04L   0120790440 N40372318W073470505         -0028300012046057200IIHIQ1                                     305541709";
const RF_LEG: &[u8] = b"SUSAP KJFKK6FR04L  R      040ZALPOK6PC0E  FL   RF       003000        04360057      01900          180    RF04L K6PC       304201709";
const AIRSPACE: &[u8] = b"SUSAUCK6TKJFK PAB  A00100     R N40394857W074144423N40413000W07409590000402450   GND  A07000MNEW YORK AREA A               676061703";

/// Benchmark individual record parsing
fn bench_records(c: &mut Criterion) {
    c.bench_function("airport", |b| {
        b.iter(|| Airport::try_from(black_box(AIRPORT)))
    });

    c.bench_function("runway", |b| b.iter(|| Runway::try_from(black_box(RUNWAY))));

    c.bench_function("procedure leg", |b| {
        b.iter(|| Procedure::try_from(black_box(RF_LEG)))
    });

    c.bench_function("controlled airspace", |b| {
        b.iter(|| ControlledAirspace::try_from(black_box(AIRSPACE)))
    });
}

/// Benchmark decoding fields that are read lazily
fn bench_decode_fields(c: &mut Criterion) {
    c.bench_function("coordinate to decimal", |b| {
        b.iter(|| {
            let arpt = Airport::try_from(black_box(AIRPORT)).expect("airport should parse");
            let _ = arpt.latitude.as_decimal();
            let _ = arpt.longitude.as_decimal();
        })
    });

    c.bench_function("arc radius to nm", |b| {
        b.iter(|| {
            let leg = Procedure::try_from(black_box(RF_LEG)).expect("leg should parse");
            let _ = leg.arc_radius.map(|radius| radius.nm());
        })
    });
}

/// Benchmark classifying a feed of records
fn bench_feed(c: &mut Criterion) {
    let data: Vec<u8> = [AIRPORT, RUNWAY, RF_LEG, AIRSPACE]
        .iter()
        .cycle()
        .take(40_000)
        .flat_map(|record| record.iter().copied().chain([b'\n']))
        .collect();

    let mut group = c.benchmark_group("feed");

    // Tell Criterion the throughput for MB/s measurement
    group.throughput(Throughput::Bytes(data.len() as u64));

    // Benchmark: Just iterate over records (baseline)
    group.bench_function("classify", |b| {
        b.iter(|| black_box(Records::new(&data).count()))
    });

    // Benchmark: Parse all procedure legs
    group.bench_function("procedures", |b| {
        b.iter(|| {
            let count = Records::new(&data)
                .filter(|(kind, _)| *kind == RecordKind::Procedure)
                .filter_map(|(_, bytes)| Procedure::try_from(bytes).ok())
                .count();
            black_box(count)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_records, bench_decode_fields, bench_feed);
criterion_main!(benches);
