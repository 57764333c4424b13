use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use stayforge_core::{Price, PropertyId, RatePlanId, ReservationId, RoomId, RoomTypeId};
use stayforge_inventory::{AggregationPolicy, PropertySnapshot, build_inventory};
use stayforge_property::{Reservation, ReservationStatus, Room, RoomStatus, RoomType};
use stayforge_rates::RatePlan;

fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

/// A property with `room_count` rooms over 4 types, seasonal + weekend rate
/// plans, and roughly half the rooms booked somewhere in the window.
fn snapshot(room_count: usize) -> PropertySnapshot {
    let type_names = ["Standard", "Queen", "Twin", "Suite"];
    let room_types: Vec<RoomType> = type_names
        .iter()
        .map(|name| RoomType {
            id: RoomTypeId::new(),
            name: name.to_string(),
            base_price: Some(Price::from_major(200)),
        })
        .collect();

    let rooms: Vec<Room> = (0..room_count)
        .map(|i| Room {
            id: RoomId::new(),
            number: format!("{}", 100 + i),
            type_name: type_names[i % type_names.len()].to_string(),
            active_for_sale: true,
            status: RoomStatus::Clean,
            price: Some(Price::from_major(150)),
        })
        .collect();

    let reservations: Vec<Reservation> = rooms
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 2 == 0)
        .map(|(i, room)| Reservation {
            id: ReservationId::new(),
            room_id: room.id,
            check_in: d("2026-02-01") + chrono::Duration::days((i % 20) as i64),
            check_out: d("2026-02-03") + chrono::Duration::days((i % 20) as i64),
            status: ReservationStatus::Confirmed,
        })
        .collect();

    let rate_plans: Vec<RatePlan> = room_types
        .iter()
        .flat_map(|rt| {
            [false, true].map(|weekend| RatePlan {
                id: RatePlanId::new(),
                room_type_id: rt.id,
                valid_from: d("2026-01-01"),
                valid_to: d("2026-12-31"),
                price: Price::from_major(if weekend { 260 } else { 220 }),
                weekend_holiday: weekend,
            })
        })
        .collect();

    PropertySnapshot {
        property_id: PropertyId::new(),
        rooms,
        room_types,
        reservations,
        blocks: Vec::new(),
        rate_plans,
        mappings: Vec::new(),
    }
}

fn bench_build_inventory(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_inventory_30_days");
    for room_count in [20usize, 100, 400] {
        let snap = snapshot(room_count);
        let policy = AggregationPolicy::default();
        group.throughput(Throughput::Elements(room_count as u64 * 30));
        group.bench_with_input(BenchmarkId::from_parameter(room_count), &snap, |b, snap| {
            b.iter(|| {
                let lines =
                    build_inventory(black_box(snap), d("2026-02-01"), d("2026-03-02"), &policy);
                black_box(lines)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_inventory);
criterion_main!(benches);
