use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use navtrack::nd::{NavigationData, ProcedureKind};
use navtrack::TrackOptions;

const AIRPORT: &[u8] = b"SUSAP KGCKK3AGCK     0     079  N38421448W101282608E0060002891                               GARDEN CITY RGNL              501012407";
const RUNWAY_17: &[u8] = b"SUSAP KGCKK3GRW17    0073001735 N38430000W101283000               02880      100                                           501022407";
const RUNWAY_35: &[u8] = b"SUSAP KGCKK3GRW35    0073003535 N38414800W101282900               02885      100                                           501032407";
const GCK01: &[u8] = b"SUSAPCKGCKK3 GCK01 K30    W     N38500000W101300000                       E0060                   GCK01                    501042407";
const GCK03: &[u8] = b"SUSAPCKGCKK3 GCK03 K30    W     N39000000W101300000                       E0060                   GCK03                    501052407";
const SID_VA: &[u8] = b"SUSAP KGCKK3DGCK1  1RW35  010         0        VA                     3535          03500                                  501122407";
const SID_DF: &[u8] = b"SUSAP KGCKK3DGCK1  1RW35  020GCK01K3PC0        DF                                                                          501132407";
const SID_TF: &[u8] = b"SUSAP KGCKK3DGCK1  1RW35  030GCK03K3PC0        TF                                 + 06000                                  501142407";
const CIRCLE: &[u8] = b"SUSAUCK3AKGCK PAC  A00100     CE                   N38421448W1012826080050       GND  A04800MGARDEN CITY                   501192407";

const RECORDS: &[&[u8]] = &[
    AIRPORT, RUNWAY_17, RUNWAY_35, GCK01, GCK03, SID_VA, SID_DF, SID_TF, CIRCLE,
];

fn bench_decode(c: &mut Criterion) {
    let records = RECORDS.join(b"\n".as_slice());

    c.bench_function("navigation data", |b| {
        b.iter(|| NavigationData::try_from_arinc424(black_box(&records)))
    });
}

fn bench_synthesis(c: &mut Criterion) {
    let nd = NavigationData::try_from_arinc424(&RECORDS.join(b"\n".as_slice()));
    let options = TrackOptions::default();

    c.bench_function("departure tracks", |b| {
        b.iter(|| {
            nd.procedure("KGCK", "GCK1", ProcedureKind::Sid)
                .map(|sid| sid.build_tracks(black_box(&nd), None, &options))
        })
    });

    c.bench_function("airspace outline", |b| {
        b.iter(|| {
            nd.airspaces()
                .iter()
                .map(|shape| shape.build_polygons())
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(benches, bench_decode, bench_synthesis);
criterion_main!(benches);
