//! Integration tests for sig-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CYCLES_FILE, CsvWriter, LANE_STATES_FILE};
    use crate::row::{CycleRow, LaneStateRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn cycle_row(cycle: u64) -> CycleRow {
        CycleRow {
            cycle,
            lane:            "lane1.jpg".into(),
            started_at_secs: (cycle - 1) * 30,
            green_secs:      30,
            waiting_before:  12,
            vehicles_passed: 10,
            waiting_after:   2,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(CYCLES_FILE).exists());
        assert!(dir.path().join(LANE_STATES_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(CYCLES_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["cycle", "lane", "started_at_secs", "green_secs", "waiting_before", "vehicles_passed", "waiting_after"]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join(LANE_STATES_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["cycle", "lane", "waiting"]);
    }

    #[test]
    fn csv_cycle_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_cycle(&cycle_row(2)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(CYCLES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "2");
        assert_eq!(&rows[0][1], "lane1.jpg");
        assert_eq!(&rows[0][2], "30");
        assert_eq!(&rows[0][5], "10");
        assert_eq!(&rows[0][6], "2");
    }

    #[test]
    fn csv_lane_names_with_commas_are_quoted() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = [LaneStateRow { cycle: 0, lane: "north, left turn".into(), waiting: 4 }];
        w.write_lane_states(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(LANE_STATES_FILE)).unwrap();
        let read: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&read[0][1], "north, left turn");
        assert_eq!(&read[0][2], "4");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn csv_empty_lane_states_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_lane_states(&[]).unwrap();
    }

    #[test]
    fn missing_dir_is_error() {
        let dir = tmp();
        assert!(CsvWriter::new(&dir.path().join("does/not/exist")).is_err());
    }
}

#[cfg(test)]
mod observer_tests {
    use sig_core::SignalConfig;
    use sig_sched::LaneScheduler;
    use tempfile::TempDir;

    use crate::csv::{CYCLES_FILE, CsvWriter, LANE_STATES_FILE};
    use crate::observer::ScheduleOutputObserver;
    use crate::row::{CycleRow, LaneStateRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    fn scenario() -> LaneScheduler {
        LaneScheduler::new([("A", 12), ("B", 7), ("C", 0)], SignalConfig::default()).unwrap()
    }

    /// In-memory writer recording everything it receives.
    #[derive(Default)]
    struct MemWriter {
        cycles:   Vec<CycleRow>,
        states:   Vec<LaneStateRow>,
        finishes: usize,
    }

    impl OutputWriter for MemWriter {
        fn write_cycle(&mut self, row: &CycleRow) -> OutputResult<()> {
            self.cycles.push(row.clone());
            Ok(())
        }
        fn write_lane_states(&mut self, rows: &[LaneStateRow]) -> OutputResult<()> {
            self.states.extend_from_slice(rows);
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            self.finishes += 1;
            Ok(())
        }
    }

    /// Writer whose cycle writes always fail.
    struct FailingWriter {
        attempts: usize,
    }

    impl OutputWriter for FailingWriter {
        fn write_cycle(&mut self, _row: &CycleRow) -> OutputResult<()> {
            self.attempts += 1;
            Err(OutputError::Io(std::io::Error::other(format!("disk full #{}", self.attempts))))
        }
        fn write_lane_states(&mut self, _rows: &[LaneStateRow]) -> OutputResult<()> {
            Ok(())
        }
        fn finish(&mut self) -> OutputResult<()> {
            Ok(())
        }
    }

    #[test]
    fn observer_records_cycles_and_states() {
        let mut obs = ScheduleOutputObserver::new(MemWriter::default());
        scenario().run(&mut obs);
        assert!(obs.take_error().is_none());

        let w = obs.into_writer();
        let lanes: Vec<&str> = w.cycles.iter().map(|r| r.lane.as_str()).collect();
        assert_eq!(lanes, ["A", "B", "A"]);
        assert_eq!(w.cycles[2].started_at_secs, 60);

        // Initial snapshot + one snapshot per cycle, three lanes each.
        assert_eq!(w.states.len(), 4 * 3);
        let initial: Vec<u32> = w.states[..3].iter().map(|r| r.waiting).collect();
        assert_eq!(initial, [12, 7, 0]);
        let after_first: Vec<u32> = w.states[3..6].iter().map(|r| r.waiting).collect();
        assert_eq!(after_first, [2, 7, 0]);
        assert!(w.states[9..].iter().all(|r| r.cycle == 3 && r.waiting == 0));
        assert_eq!(w.finishes, 1);
    }

    #[test]
    fn observer_keeps_first_error() {
        let mut obs = ScheduleOutputObserver::new(FailingWriter { attempts: 0 });
        scenario().run(&mut obs);
        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full #1"));
        assert!(obs.take_error().is_none());
        assert_eq!(obs.into_writer().attempts, 3);
    }

    #[test]
    fn integration_csv() {
        let dir: TempDir = tempfile::tempdir().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = ScheduleOutputObserver::new(writer);
        let summary = scenario().run(&mut obs);
        assert!(obs.take_error().is_none());
        assert_eq!(summary.cycles, 3);

        let mut rdr = csv::Reader::from_path(dir.path().join(CYCLES_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 3);

        let mut rdr = csv::Reader::from_path(dir.path().join(LANE_STATES_FILE)).unwrap();
        assert_eq!(rdr.records().count(), 12);
    }
}
