use crate::domain::ports::{Observation, Region, VisibilityCallback, VisibilityObserver};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

type SharedCallback = Rc<RefCell<VisibilityCallback>>;

struct Watcher {
    id: u64,
    region: Region,
    on_change: SharedCallback,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    watchers: Vec<Watcher>,
    visible: HashMap<Region, bool>,
}

impl Registry {
    fn is_visible(&self, region: Region) -> bool {
        // 尚未回報的區域視為可見
        self.visible.get(&region).copied().unwrap_or(true)
    }

    fn is_registered(&self, id: u64) -> bool {
        self.watchers.iter().any(|watcher| watcher.id == id)
    }
}

/// 單執行緒的可見性來源。前端回報區域可見性，
/// 只有在狀態改變時才通知。
///
/// callback 執行時不持有 registry 的借用，可以再呼叫同一個 viewport
/// （查詢、登記、釋放 `Observation`）。clone 共用同一份狀態。
#[derive(Default, Clone)]
pub struct Viewport {
    registry: Rc<RefCell<Registry>>,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_visible(&self, region: Region, visible: bool) {
        let targets: Vec<(u64, SharedCallback)> = {
            let mut registry = self.registry.borrow_mut();
            let previous = registry.is_visible(region);
            registry.visible.insert(region, visible);

            if previous == visible {
                return;
            }

            registry
                .watchers
                .iter()
                .filter(|watcher| watcher.region == region)
                .map(|watcher| (watcher.id, Rc::clone(&watcher.on_change)))
                .collect()
        };

        tracing::trace!("{:?} visibility changed to {}", region, visible);
        for (id, on_change) in targets {
            {
                let registry = self.registry.borrow();
                // 途中被釋放的不再通知；狀態又變了則交給較新的那次呼叫
                if registry.is_visible(region) != visible {
                    break;
                }
                if !registry.is_registered(id) {
                    continue;
                }
            }
            // 自己的 callback 裡再觸發同一區域時略過自己
            if let Ok(mut callback) = on_change.try_borrow_mut() {
                callback(visible);
            }
        }
    }

    pub fn watcher_count(&self) -> usize {
        self.registry.borrow().watchers.len()
    }
}

impl VisibilityObserver for Viewport {
    fn observe(&self, region: Region, mut on_change: VisibilityCallback) -> Observation {
        // 登記時先送出目前狀態
        let current = self.registry.borrow().is_visible(region);
        on_change(current);

        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.watchers.push(Watcher {
            id,
            region,
            on_change: Rc::new(RefCell::new(on_change)),
        });
        drop(registry);

        let weak: Weak<RefCell<Registry>> = Rc::downgrade(&self.registry);
        Observation::new(move || {
            if let Some(registry) = weak.upgrade() {
                // 移出後才 drop，callback 本身持有的 Observation 也能安全釋放
                let removed = {
                    let mut registry = registry.borrow_mut();
                    let index = registry.watchers.iter().position(|w| w.id == id);
                    index.map(|index| registry.watchers.remove(index))
                };
                drop(removed);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, VisibilityCallback) {
        let count = Rc::new(Cell::new(0));
        let handle = Rc::clone(&count);
        (count, Box::new(move |_: bool| handle.set(handle.get() + 1)))
    }

    #[test]
    fn test_observe_reports_current_state() {
        let viewport = Viewport::new();
        viewport.set_visible(Region::TotalPanel, false);

        let seen = Rc::new(Cell::new(true));
        let handle = Rc::clone(&seen);
        let _watch = viewport.observe(Region::TotalPanel, Box::new(move |v: bool| handle.set(v)));

        assert!(!seen.get());
    }

    #[test]
    fn test_notifies_only_on_change() {
        let viewport = Viewport::new();
        let (count, callback) = counter();
        let _watch = viewport.observe(Region::TotalPanel, callback);
        assert_eq!(count.get(), 1);

        viewport.set_visible(Region::TotalPanel, true);
        viewport.set_visible(Region::TotalPanel, false);
        viewport.set_visible(Region::TotalPanel, false);
        viewport.set_visible(Region::TotalPanel, true);

        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_drop_deregisters() {
        let viewport = Viewport::new();
        let (count, callback) = counter();
        let watch = viewport.observe(Region::TotalPanel, callback);
        assert_eq!(viewport.watcher_count(), 1);

        drop(watch);
        assert_eq!(viewport.watcher_count(), 0);

        viewport.set_visible(Region::TotalPanel, false);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_callback_may_use_viewport() {
        let viewport = Viewport::new();
        let inner = viewport.clone();
        let seen_count = Rc::new(Cell::new(0));
        let late: Rc<RefCell<Vec<Observation>>> = Rc::default();

        let count_handle = Rc::clone(&seen_count);
        let late_handle = Rc::clone(&late);
        let _watch = viewport.observe(
            Region::TotalPanel,
            Box::new(move |visible: bool| {
                count_handle.set(inner.watcher_count());
                if !visible {
                    let (_, callback) = counter();
                    late_handle
                        .borrow_mut()
                        .push(inner.observe(Region::TotalPanel, callback));
                }
            }),
        );

        viewport.set_visible(Region::TotalPanel, false);

        assert_eq!(seen_count.get(), 1);
        assert_eq!(viewport.watcher_count(), 2);
        drop(late.borrow_mut().pop());
        assert_eq!(viewport.watcher_count(), 1);
    }

    #[test]
    fn test_observation_released_during_notification() {
        let viewport = Viewport::new();
        let (second_count, second) = counter();
        let slot: Rc<RefCell<Option<Observation>>> = Rc::default();

        let slot_handle = Rc::clone(&slot);
        let _first = viewport.observe(
            Region::TotalPanel,
            Box::new(move |visible: bool| {
                if !visible {
                    slot_handle.borrow_mut().take();
                }
            }),
        );
        *slot.borrow_mut() = Some(viewport.observe(Region::TotalPanel, second));
        assert_eq!(second_count.get(), 1);

        viewport.set_visible(Region::TotalPanel, false);

        assert_eq!(viewport.watcher_count(), 1);
        assert_eq!(second_count.get(), 1);
    }

    #[test]
    fn test_observation_outliving_viewport() {
        let viewport = Viewport::new();
        let (_, callback) = counter();
        let watch = viewport.observe(Region::TotalPanel, callback);

        drop(viewport);
        drop(watch);
    }
}
