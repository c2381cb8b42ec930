//! Property tests over random sequences of board operations.

use corkboard::{Board, Column, ColumnId, DragItem, Task, TaskDraft, TaskId};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

/// Builds a board with `layout[i]` tasks in column `i`.
fn layout_board(layout: &[usize]) -> Board {
    let mut columns = Vec::new();
    let mut tasks = Vec::new();
    let mut next = 0;

    for (index, &count) in layout.iter().enumerate() {
        let column_id = ColumnId::from(format!("column-{index}"));
        let mut column = Column::new(column_id.clone(), format!("label.{index}"));
        for _ in 0..count {
            let id = TaskId::from(format!("task-{next}"));
            next += 1;
            column.task_ids.push(id.clone());
            tasks.push(Task::from_draft(
                id.clone(),
                column_id.clone(),
                TaskDraft::new(format!("Task {id}")),
            ));
        }
        columns.push(column);
    }

    Board::from_parts(columns, tasks).unwrap()
}

prop_compose! {
    fn arb_board()(layout in prop::collection::vec(0usize..5, 1..5)) -> Board {
        layout_board(&layout)
    }
}

#[derive(Debug, Clone)]
enum Target {
    Task(usize),
    Column(usize),
}

#[derive(Debug, Clone)]
enum Op {
    AddTask(usize),
    AddColumn,
    MoveTask { task: usize, over: Option<Target> },
    MoveColumn { active: usize, over: usize },
    DeleteTask(usize),
    DeleteColumn(usize),
}

fn arb_target() -> impl Strategy<Value = Target> {
    prop_oneof![
        any::<usize>().prop_map(Target::Task),
        any::<usize>().prop_map(Target::Column),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => any::<usize>().prop_map(Op::AddTask),
        1 => Just(Op::AddColumn),
        4 => (any::<usize>(), proptest::option::of(arb_target()))
            .prop_map(|(task, over)| Op::MoveTask { task, over }),
        2 => (any::<usize>(), any::<usize>())
            .prop_map(|(active, over)| Op::MoveColumn { active, over }),
        1 => any::<usize>().prop_map(Op::DeleteTask),
        1 => any::<usize>().prop_map(Op::DeleteColumn),
    ]
}

// One index past the end picks an id that is not on the board.
fn task_at(board: &Board, index: usize) -> TaskId {
    let ids: Vec<&TaskId> = board.columns().iter().flat_map(|c| &c.task_ids).collect();
    ids.get(index % (ids.len() + 1))
        .map_or_else(|| TaskId::from("task-missing"), |id| (*id).clone())
}

fn column_at(board: &Board, index: usize) -> ColumnId {
    let columns = board.columns();
    columns
        .get(index % (columns.len() + 1))
        .map_or_else(|| ColumnId::from("column-missing"), |c| c.id.clone())
}

fn apply(board: &Board, op: &Op) -> Result<Board, TestCaseError> {
    let total = board.total_tasks();

    let next = match op {
        Op::AddTask(column) => {
            let column = column_at(board, *column);
            match board.add_task(&column, TaskDraft::new("new")) {
                Ok((next, id)) => {
                    prop_assert_eq!(next.total_tasks(), total + 1);
                    prop_assert_eq!(next.column(&column).and_then(|c| c.task_ids.last()), Some(&id));
                    next
                }
                Err(_) => board.clone(),
            }
        }
        Op::AddColumn => {
            let (next, _) = board.add_column("label.generated");
            prop_assert_eq!(next.columns().len(), board.columns().len() + 1);
            next
        }
        Op::MoveTask { task, over } => {
            let over = over.as_ref().map(|target| match target {
                Target::Task(i) => DragItem::Task(task_at(board, *i)),
                Target::Column(i) => DragItem::Column(column_at(board, *i)),
            });
            let next = board.move_task(&task_at(board, *task), over.as_ref());
            prop_assert_eq!(next.total_tasks(), total);
            next
        }
        Op::MoveColumn { active, over } => {
            let next = board.move_column(&column_at(board, *active), &column_at(board, *over));
            prop_assert_eq!(next.columns().len(), board.columns().len());
            prop_assert_eq!(next.total_tasks(), total);
            next
        }
        Op::DeleteTask(task) => match board.delete_task(&task_at(board, *task)) {
            Ok(next) => {
                prop_assert_eq!(next.total_tasks(), total - 1);
                next
            }
            Err(_) => board.clone(),
        },
        Op::DeleteColumn(column) => {
            let id = column_at(board, *column);
            let len = board.column(&id).map(Column::len);
            match board.delete_column(&id) {
                Ok(next) => {
                    prop_assert_eq!(Some(total - next.total_tasks()), len);
                    next
                }
                Err(_) => {
                    prop_assert!(len.is_none());
                    board.clone()
                }
            }
        }
    };

    prop_assert!(
        next.check_invariants().is_ok(),
        "{op:?} broke the board:\n{next}"
    );
    Ok(next)
}

proptest! {
    #[test]
    fn random_operation_sequences_keep_invariants(
        board in arb_board(),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let mut board = board;
        for op in &ops {
            board = apply(&board, op)?;
        }
    }

    #[test]
    fn dropping_a_task_on_itself_is_a_noop(board in arb_board(), index in any::<usize>()) {
        prop_assume!(board.total_tasks() > 0);
        let task = task_at(&board, index % board.total_tasks());

        let next = board.move_task(&task, Some(&DragItem::Task(task.clone())));
        prop_assert_eq!(&next, &board);
    }

    #[test]
    fn dropping_a_task_on_its_own_column_is_a_noop(board in arb_board(), index in any::<usize>()) {
        prop_assume!(board.total_tasks() > 0);
        let task = task_at(&board, index % board.total_tasks());
        let column = board.task(&task).unwrap().column_id.clone();

        let next = board.move_task(&task, Some(&DragItem::Column(column)));
        prop_assert_eq!(&next, &board);
    }

    #[test]
    fn adjacent_column_swap_reverses(board in arb_board(), index in any::<usize>()) {
        let count = board.columns().len();
        prop_assume!(count >= 2);
        let left = board.columns()[index % (count - 1)].id.clone();
        let right = board.columns()[index % (count - 1) + 1].id.clone();

        let swapped = board.move_column(&left, &right);
        prop_assert_eq!(swapped.column_index(&left), board.column_index(&right));

        let restored = swapped.move_column(&right, &left);
        prop_assert_eq!(&restored, &board);
    }
}
