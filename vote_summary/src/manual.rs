/*!

This is the long-form manual for `vote_summary` and `votesum`.

## Input formats

The following formats are supported:
* `xlsx` Excel spreadsheet (the first worksheet, unless a worksheet name is given)
* `csv` Comma Separated Values

### Layout of the table

| Nombre | Votos | Sexo |
|--------|-------|------|
| Ana    | 120   | F    |
| Luis   | 80    | M    |
| Total  | 200   |      |

- the first row is a header and is never read
- the first column is the name of the candidate, the second the number of votes,
  the third the gender (`M` or `F`)
- rows with an empty cell in any of these three columns are skipped
- a number of votes that is not a non-negative integer stops the processing

By default the last row of the table is not read (in the example above, the `Total`
row). Pass `--include-last-row` to `votesum` (or use `RowBound::IncludeLast`) to read
every row.

Genders other than `M` and `F` are accepted: the candidate counts towards the total
and can win, but does not count for `Hombres` or `Mujeres`.

## Output

```json
{
  "Ganador": "Ana",
  "TotalVotos": 200,
  "VotosPorGenero": [{"Hombres": 80}, {"Mujeres": 120}],
  "PorcentajePorCandidato": [{"Ana": 60.0}, {"Luis": 40.0}]
}
```

Percentages are rounded to two decimals, with ties rounded to the even digit.
In case of a tie for the most votes, the first candidate of the table wins.

*/
