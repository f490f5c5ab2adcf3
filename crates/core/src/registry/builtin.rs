use super::NameRegistry;
use typex_api::{ClassRef, PRIMITIVES};

const JAVA_LANG: &[&str] = &[
    "java.lang.Object",
    "java.lang.String",
    "java.lang.CharSequence",
    "java.lang.Boolean",
    "java.lang.Byte",
    "java.lang.Character",
    "java.lang.Short",
    "java.lang.Integer",
    "java.lang.Long",
    "java.lang.Float",
    "java.lang.Double",
    "java.lang.Number",
    "java.lang.Void",
    "java.lang.Class",
    "java.lang.Enum",
    "java.lang.Comparable",
    "java.lang.Iterable",
    "java.lang.Runnable",
    "java.lang.Throwable",
    "java.lang.Exception",
    "java.lang.RuntimeException",
];

const COLLECTIONS: &[&str] = &[
    "java.util.Collection",
    "java.util.List",
    "java.util.ArrayList",
    "java.util.LinkedList",
    "java.util.Set",
    "java.util.HashSet",
    "java.util.LinkedHashSet",
    "java.util.SortedSet",
    "java.util.TreeSet",
    "java.util.Queue",
    "java.util.Deque",
    "java.util.ArrayDeque",
    "java.util.PriorityQueue",
    "java.util.concurrent.CopyOnWriteArrayList",
];

const OTHER: &[&str] = &[
    "java.util.Map",
    "java.util.HashMap",
    "java.util.LinkedHashMap",
    "java.util.SortedMap",
    "java.util.TreeMap",
    "java.util.concurrent.ConcurrentHashMap",
    "java.util.Optional",
    "java.util.UUID",
    "java.util.Date",
    "java.math.BigDecimal",
    "java.math.BigInteger",
    "java.time.Instant",
    "java.time.Duration",
    "java.time.Period",
    "java.time.LocalDate",
    "java.time.LocalTime",
    "java.time.LocalDateTime",
    "java.time.OffsetDateTime",
    "java.time.ZonedDateTime",
    "java.time.ZoneId",
];

pub(super) fn java_defaults() -> NameRegistry {
    let mut registry = NameRegistry::empty();

    let primitives = PRIMITIVES.iter().map(|name| (*name, false));
    let lang = JAVA_LANG.iter().map(|name| (*name, false));
    let collections = COLLECTIONS.iter().map(|name| (*name, true));
    let other = OTHER.iter().map(|name| (*name, false));

    for (name, collection) in primitives.chain(lang).chain(collections).chain(other) {
        let simple = ClassRef::new(name);
        let inserted = registry.insert(name, Some(simple.simple_name()), collection);
        debug_assert!(inserted.is_ok(), "builtin entry '{name}' conflicts");
    }
    registry
}
