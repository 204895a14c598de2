pub mod clock_tick;
