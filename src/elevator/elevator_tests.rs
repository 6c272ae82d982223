/*
 * Unit tests for elevator module
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_elevator_init
 * - test_elevator_add_destination_idempotent
 * - test_elevator_add_current_floor
 * - test_elevator_remove_destination
 * - test_elevator_next_destination_keeps_direction
 * - test_elevator_reversal_picks_nearest_behind
 * - test_elevator_advance_one_floor
 * - test_elevator_advance_without_destination
 * - test_elevator_visits_in_sweep_order
 * - test_elevator_can_serve
 * - test_elevator_distance_to
 * - test_elevator_reset
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod elevator_tests {
    use crate::elevator::Elevator;
    use crate::shared::Behaviour;
    use crate::shared::CallDirection::{Down, Up};
    use crate::shared::Direction;
    use crate::shared::FloorCall;

    fn assert_idle_invariant(elevator: &Elevator) {
        assert_eq!(
            elevator.direction() == Direction::Idle,
            elevator.destinations().count() == 0
        );
        assert_eq!(elevator.state(), Behaviour::from(elevator.direction()));
    }

    // Drives a fresh elevator to `floor` and leaves it idle there
    fn elevator_at(floor: u8) -> Elevator {
        let mut elevator = Elevator::new(0);
        elevator.add_destination(floor);
        while elevator.advance_one_step() {}
        elevator
    }

    #[test]
    fn test_elevator_init() {
        // Arrange
        let elevator = Elevator::new(2);

        // Assert
        assert_eq!(elevator.id(), 2);
        assert_eq!(elevator.current_floor(), 0);
        assert_eq!(elevator.direction(), Direction::Idle);
        assert_eq!(elevator.state(), Behaviour::Idle);
        assert_eq!(elevator.next_destination(), None);
        assert_idle_invariant(&elevator);
    }

    #[test]
    fn test_elevator_add_destination_idempotent() {
        // Arrange
        let mut elevator = Elevator::new(0);

        // Act
        elevator.add_destination(5);
        elevator.add_destination(5);

        // Assert
        assert_eq!(elevator.destinations().collect::<Vec<u8>>(), vec![5]);
        assert!(elevator.has_destination(5));
        assert_eq!(elevator.direction(), Direction::Up);
        assert_eq!(elevator.state(), Behaviour::MovingUp);
        assert_idle_invariant(&elevator);
    }

    #[test]
    fn test_elevator_add_current_floor() {
        // Purpose: A destination at the current floor is satisfied without entering the set

        // Arrange
        let mut elevator = elevator_at(3);

        // Act
        elevator.add_destination(3);

        // Assert
        assert_eq!(elevator.current_floor(), 3);
        assert!(!elevator.has_destination(3));
        assert_eq!(elevator.direction(), Direction::Idle);
        assert_idle_invariant(&elevator);
    }

    #[test]
    fn test_elevator_remove_destination() {
        // Arrange
        let mut elevator = elevator_at(4);
        elevator.add_destination(1);
        assert_eq!(elevator.direction(), Direction::Down);

        // Act
        elevator.remove_destination(1);
        elevator.remove_destination(9);

        // Assert
        assert!(!elevator.has_destination(1));
        assert_eq!(elevator.direction(), Direction::Idle);
        assert_idle_invariant(&elevator);
    }

    #[test]
    fn test_elevator_next_destination_keeps_direction() {
        // Arrange
        let mut elevator = elevator_at(5);
        elevator.add_destination(8);
        elevator.add_destination(7);

        // Act
        elevator.add_destination(2);

        // Assert
        assert_eq!(elevator.direction(), Direction::Up);
        assert_eq!(elevator.next_destination(), Some(7));
    }

    #[test]
    fn test_elevator_reversal_picks_nearest_behind() {
        // Purpose: Once nothing is left ahead, the next stop is the nearest floor behind the car

        // Arrange
        let mut elevator = elevator_at(5);
        elevator.add_destination(6);
        elevator.add_destination(1);
        elevator.add_destination(4);

        // Act
        assert!(elevator.advance_one_step());

        // Assert
        assert_eq!(elevator.current_floor(), 6);
        assert_eq!(elevator.direction(), Direction::Down);
        assert_eq!(elevator.next_destination(), Some(4));

        // Arrange: same when reversing from a downward sweep
        let mut elevator = elevator_at(5);
        elevator.add_destination(3);
        elevator.add_destination(9);
        elevator.add_destination(6);

        // Act
        assert!(elevator.advance_one_step());
        assert!(elevator.advance_one_step());

        // Assert
        assert_eq!(elevator.current_floor(), 3);
        assert_eq!(elevator.direction(), Direction::Up);
        assert_eq!(elevator.next_destination(), Some(6));
    }

    #[test]
    fn test_elevator_advance_one_floor() {
        // Arrange
        let mut elevator = Elevator::new(0);
        elevator.add_destination(3);

        // Act / Assert
        for expected in 1..=3 {
            let before = elevator.current_floor();
            assert!(elevator.advance_one_step());
            assert_eq!(elevator.current_floor(), expected);
            assert_eq!(elevator.current_floor().abs_diff(before), 1);
            assert_idle_invariant(&elevator);
        }

        assert!(!elevator.has_destination(3));
        assert_eq!(elevator.direction(), Direction::Idle);
    }

    #[test]
    fn test_elevator_advance_without_destination() {
        // Arrange
        let mut elevator = Elevator::new(0);

        // Act
        let moved = elevator.advance_one_step();

        // Assert
        assert!(!moved);
        assert_eq!(elevator.current_floor(), 0);
        assert_eq!(elevator.direction(), Direction::Idle);
    }

    #[test]
    fn test_elevator_visits_in_sweep_order() {
        // Arrange
        let mut elevator = elevator_at(3);
        elevator.add_destination(7);
        elevator.add_destination(5);
        elevator.add_destination(1);
        let mut visited = Vec::new();

        // Act
        while elevator.advance_one_step() {
            let floor = elevator.current_floor();
            if [1, 5, 7].contains(&floor) && !visited.contains(&floor) {
                visited.push(floor);
            }
            assert_idle_invariant(&elevator);
        }

        // Assert
        assert_eq!(visited, vec![5, 7, 1]);
        assert_eq!(elevator.current_floor(), 1);
    }

    #[test]
    fn test_elevator_can_serve() {
        // Arrange
        let idle = Elevator::new(0);
        let mut going_up = elevator_at(3);
        going_up.add_destination(7);
        let mut going_down = elevator_at(6);
        going_down.add_destination(2);

        // Assert
        assert!(idle.can_serve(&FloorCall::new(4, Down)));
        assert!(idle.can_serve(&FloorCall::new(4, Up)));

        assert!(going_up.can_serve(&FloorCall::new(5, Up)));
        assert!(going_up.can_serve(&FloorCall::new(3, Up)));
        assert!(!going_up.can_serve(&FloorCall::new(2, Up)));
        assert!(!going_up.can_serve(&FloorCall::new(5, Down)));

        assert!(going_down.can_serve(&FloorCall::new(4, Down)));
        assert!(going_down.can_serve(&FloorCall::new(6, Down)));
        assert!(!going_down.can_serve(&FloorCall::new(8, Down)));
        assert!(!going_down.can_serve(&FloorCall::new(4, Up)));
    }

    #[test]
    fn test_elevator_distance_to() {
        // Arrange
        let elevator = elevator_at(6);

        // Assert
        assert_eq!(elevator.distance_to(&FloorCall::new(2, Up)), 4);
        assert_eq!(elevator.distance_to(&FloorCall::new(9, Down)), 3);
        assert_eq!(elevator.distance_to(&FloorCall::new(6, Up)), 0);
    }

    #[test]
    fn test_elevator_reset() {
        // Arrange
        let mut elevator = elevator_at(4);
        elevator.add_destination(8);
        elevator.add_destination(1);

        // Act
        elevator.reset();

        // Assert
        assert_eq!(elevator.current_floor(), 0);
        assert_eq!(elevator.destinations().count(), 0);
        assert_eq!(elevator.direction(), Direction::Idle);
        assert_eq!(elevator.next_destination(), None);
        assert_idle_invariant(&elevator);
    }
}
