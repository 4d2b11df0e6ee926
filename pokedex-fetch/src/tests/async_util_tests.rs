use super::*;

#[tokio::test]
async fn test_all_events_delivered_before_result() {
    let (tx, rx) = mpsc::unbounded_channel::<u32>();
    let task = async move {
        for i in 0..5 {
            let _ = tx.send(i);
            tokio::task::yield_now().await;
        }
        "done"
    };

    let mut seen = Vec::new();
    let result = run_with_events(task, rx, |e| seen.push(e)).await;

    assert_eq!(result, "done");
    assert_eq!(seen, vec![0, 1, 2, 3, 4]);
}

#[tokio::test]
async fn test_task_finishes_when_channel_closes_first() {
    let (tx, rx) = mpsc::unbounded_channel::<u32>();
    drop(tx);
    let task = async {
        tokio::task::yield_now().await;
        7
    };

    let result = run_with_events(task, rx, |_| {}).await;
    assert_eq!(result, 7);
}
