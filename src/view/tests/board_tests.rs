//! Kanban grouping tests.

use super::{days_from_today, order, today};
use crate::order::domain::{KanbanColumn, OrderId, OrderStatus};
use crate::view::{KanbanBoard, PendingMove};
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
fn lanes_partition_board_statuses_only() {
    let records: Vec<_> = crate::order::domain::OrderStatus::ALL
        .iter()
        .enumerate()
        .map(|(index, status)| order(&index.to_string(), *status))
        .collect();

    let board = KanbanBoard::build(&records, &[], today());

    let mut seen = HashSet::new();
    for lane in &board.lanes {
        for card in &lane.cards {
            assert!(seen.insert(card.order.id().clone()), "card on two lanes");
            assert_eq!(KanbanColumn::for_status(card.order.status()), Some(lane.column));
        }
    }
    let expected: HashSet<OrderId> = records
        .iter()
        .filter(|record| {
            matches!(
                record.status(),
                OrderStatus::Overdue | OrderStatus::InTreatment | OrderStatus::Treated
            )
        })
        .map(|record| record.id().clone())
        .collect();
    assert_eq!(seen, expected);
    assert_eq!(board.card_count(), 3);
}

#[rstest]
fn open_order_never_reaches_the_board() {
    let records = vec![order("open", OrderStatus::Open)];

    let board = KanbanBoard::build(&records, &[], today());

    assert_eq!(board.card_count(), 0);
    assert_eq!(board.lanes.len(), 3);
}

#[rstest]
fn cards_carry_overdue_days() {
    let records =
        vec![order("late", OrderStatus::Overdue).with_expected_finish_on(days_from_today(-4))];

    let board = KanbanBoard::build(&records, &[], today());

    let lane = board.lane(KanbanColumn::Overdue).expect("overdue lane");
    let card = lane.cards.first().expect("one card");
    assert_eq!(card.overdue_days, 4);
    assert!(!card.pending);
}

#[rstest]
fn pending_move_shows_card_in_target_column() {
    let records = vec![order("A", OrderStatus::Overdue)];
    let id = OrderId::new("A").expect("valid id");
    let pending = vec![PendingMove {
        order_id: id.clone(),
        column: KanbanColumn::InTreatment,
    }];

    let optimistic = KanbanBoard::build(&records, &pending, today());
    let confirmed = KanbanBoard::build(&records, &[], today());

    assert_eq!(optimistic.column_of(&id), Some(KanbanColumn::InTreatment));
    assert!(
        optimistic
            .lane(KanbanColumn::InTreatment)
            .and_then(|lane| lane.cards.first())
            .is_some_and(|card| card.pending)
    );
    assert_eq!(optimistic.card_count(), 1);
    assert_eq!(confirmed.column_of(&id), Some(KanbanColumn::Overdue));
}
