//! 优先队列模块
//!
//! 惰性删除的最小堆：条目可重复入堆，过期条目在出堆时由调用方
//! 对照距离表丢弃

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::NodeId;

/// 堆条目，键相同时按节点 id 升序
#[derive(Debug, Clone)]
struct FrontierEntry<K> {
    key: K,
    node: NodeId,
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // 反转比较得到最小堆
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for FrontierEntry<K> {}

/// 搜索前沿
#[derive(Debug, Clone)]
pub struct Frontier<K> {
    heap: BinaryHeap<FrontierEntry<K>>,
}

impl<K: Ord> Frontier<K> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, key: K, node: NodeId) {
        self.heap.push(FrontierEntry { key, node });
    }

    pub fn pop(&mut self) -> Option<(K, NodeId)> {
        self.heap.pop().map(|entry| (entry.key, entry.node))
    }

    /// 当前最小键（可能属于过期条目）
    pub fn peek_key(&self) -> Option<&K> {
        self.heap.peek().map(|entry| &entry.key)
    }

    /// 待处理条目数，包括过期条目
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<K: Ord> Default for Frontier<K> {
    fn default() -> Self {
        Self::new()
    }
}
