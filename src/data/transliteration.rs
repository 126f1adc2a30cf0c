/*
* Russian Cyrillic to Latin, close to the romanisation GeoNames uses for asciiname.
* The letter е is absent because its spelling depends on the preceding letter,
* see lib::translit. Hard and soft signs have no Latin spelling.
*/
pub const CYRILLIC_TO_LATIN: [(char, &'static str); 32] = [
  ('а', "a"),
  ('б', "b"),
  ('в', "v"),
  ('г', "g"),
  ('д', "d"),
  ('ё', "yo"),
  ('ж', "zh"),
  ('з', "z"),
  ('и', "i"),
  ('й', "y"),
  ('к', "k"),
  ('л', "l"),
  ('м', "m"),
  ('н', "n"),
  ('о', "o"),
  ('п', "p"),
  ('р', "r"),
  ('с', "s"),
  ('т', "t"),
  ('у', "u"),
  ('ф', "f"),
  ('х', "kh"),
  ('ц', "ts"),
  ('ч', "ch"),
  ('ш', "sh"),
  ('щ', "shch"),
  ('ъ', ""),
  ('ы', "y"),
  ('ь', ""),
  ('э', "e"),
  ('ю', "yu"),
  ('я', "ya"),
];

/*
* Latin digraphs read back as one letter, longest first so shch wins over sh.
* ye, y and e are context dependent and handled in lib::translit.
*/
pub const LATIN_DIGRAPHS: [(&'static str, char); 9] = [
  ("shch", 'щ'),
  ("yo", 'ё'),
  ("yu", 'ю'),
  ("ya", 'я'),
  ("zh", 'ж'),
  ("kh", 'х'),
  ("ts", 'ц'),
  ("ch", 'ч'),
  ("sh", 'ш'),
];

pub const LATIN_LETTERS: [(char, char); 18] = [
  ('a', 'а'),
  ('b', 'б'),
  ('v', 'в'),
  ('g', 'г'),
  ('d', 'д'),
  ('z', 'з'),
  ('i', 'и'),
  ('k', 'к'),
  ('l', 'л'),
  ('m', 'м'),
  ('n', 'н'),
  ('o', 'о'),
  ('p', 'п'),
  ('r', 'р'),
  ('s', 'с'),
  ('t', 'т'),
  ('u', 'у'),
  ('f', 'ф'),
];

pub const CYRILLIC_VOWELS: [char; 10] = ['а', 'е', 'ё', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];
