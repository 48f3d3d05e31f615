fn main() { lina_tasks::entry_points::lina() }
