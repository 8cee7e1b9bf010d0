use bounded_collections::collections::{BoundedQueue, BoundedStack, ContainerError};

fn queue_walkthrough() -> Result<(), ContainerError> {
    let mut queue = BoundedQueue::new();
    queue.enqueue(["1", "2", "three"])?;
    println!("Queued: {:?}", queue.to_vec());
    println!("Dequeued: {}", queue.dequeue()?);
    queue.enqueue_one("3")?;
    println!("Added: {}", queue.to_vec()[queue.size() - 1]);
    println!("Queue content: {queue}");
    println!("Top of queue: {:?}", queue.peek());
    queue.clear();
    println!("Cleared queue");

    let mut queue = BoundedQueue::bounded(4);
    queue.enqueue([1, 2, 3, 4])?;
    println!("Queued: {:?}", queue.to_vec());
    println!("Queue contains 5?: {}", queue.contains(&5));
    println!("Queue contains 2?: {}", queue.contains(&2));
    println!("Index (1-based) of 4: {}", queue.search(&4)?);
    println!("Queue as string: {}", queue.describe());
    if let Err(err) = queue.enqueue_one(5) {
        println!("Rejected: {err}");
    }
    Ok(())
}

fn stack_walkthrough() -> Result<(), ContainerError> {
    let mut stack = BoundedStack::new();
    stack.push(["1", "2", "three", "4"])?;
    println!("Pushed: {:?}", stack.to_vec());
    println!("Popped: {}", stack.pop()?);
    stack.push_one("3")?;
    println!("Pushed: {:?}", stack.peek());
    println!("Top of stack: {:?}", stack.peek());
    stack.clear();
    println!("Cleared stack");

    let mut stack = BoundedStack::bounded(4);
    stack.push([1, 2, 3, 4])?;
    println!("Pushed: {:?}", stack.to_vec());
    println!("Stack contains 5?: {}", stack.contains(&5));
    println!("Stack contains 2?: {}", stack.contains(&2));
    println!("Index (1-based) of 4: {}", stack.search(&4)?);
    println!("Stack as string: {}", stack.describe());
    println!("Stack content: {stack}");
    stack.clear();
    if let Err(err) = stack.pop() {
        println!("Rejected: {err}");
    }
    Ok(())
}

fn main() -> Result<(), ContainerError> {
    queue_walkthrough()?;
    stack_walkthrough()
}
